use once_cell::sync::Lazy;
use regex::Regex;

/// Marks the start of a new item: an item identifier preceded by the
/// recognizable `Question ID` tag.
static BLOCK_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Question ID [a-f0-9]+\n").expect("valid block delimiter regex"));

/// Removes carriage returns left over from the upstream PDF-to-text
/// conversion. Applied once per subject before splitting.
pub fn normalize(text: &str) -> String {
    text.replace('\r', "")
}

/// Partitions a subject's raw text into one chunk per candidate question.
/// Splitting never fails; pathological input yields zero or one block.
pub fn split_blocks(text: &str) -> Vec<&str> {
    BLOCK_DELIMITER
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
