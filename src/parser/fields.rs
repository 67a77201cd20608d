/// Phrases that mark a line as the actual prompt rather than passage text.
const PROMPT_PHRASES: [&str; 2] = ["which choice", "based on the text"];

/// Separates the combined passage+prompt region that precedes the first
/// choice marker.
///
/// Scans backward line by line for the last line that is recognizably the
/// prompt: one containing a question mark, an underscore blank, or a
/// standard discriminator phrase. Everything before that line is the
/// passage; that line through the end is the prompt. When the scan reaches
/// the top without a hit, the whole region is treated as the prompt with an
/// empty passage — an unsplit block is still usable, a wrongly split one
/// corrupts both fields.
pub fn split_passage_and_prompt(region: &str) -> (String, String) {
    let lines: Vec<&str> = region.lines().collect();
    if lines.is_empty() {
        return (String::new(), String::new());
    }

    let mut prompt_start = lines.len() - 1;
    while prompt_start > 0 {
        if is_prompt_line(lines[prompt_start]) {
            break;
        }
        prompt_start -= 1;
    }

    if prompt_start > 0 {
        let passage = lines[..prompt_start].join("\n").trim().to_string();
        let prompt = lines[prompt_start..].join("\n").trim().to_string();
        (passage, prompt)
    } else {
        (String::new(), region.trim().to_string())
    }
}

fn is_prompt_line(line: &str) -> bool {
    if line.contains('?') || line.contains("______") {
        return true;
    }
    let lower = line.to_lowercase();
    PROMPT_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_question_mark_line() {
        let region = "A passage about birds.\nIt spans two lines.\nWhat does the author imply?";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert_eq!(passage, "A passage about birds.\nIt spans two lines.");
        assert_eq!(prompt, "What does the author imply?");
    }

    #[test]
    fn recognizes_underscore_blank_as_prompt() {
        let region = "Some context.\nComplete the sentence: ______";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert_eq!(passage, "Some context.");
        assert_eq!(prompt, "Complete the sentence: ______");
    }

    #[test]
    fn recognizes_discriminator_phrases_case_insensitively() {
        let region = "Long passage.\nWhich Choice best supports the claim";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert_eq!(passage, "Long passage.");
        assert_eq!(prompt, "Which Choice best supports the claim");

        let region = "Long passage.\nBased on the text, the author agrees";
        let (passage, _) = split_passage_and_prompt(region);
        assert_eq!(passage, "Long passage.");
    }

    #[test]
    fn no_boundary_means_whole_region_is_prompt() {
        let region = "Solve for x.\n3x + 1 = 10";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert!(passage.is_empty());
        assert_eq!(prompt, "Solve for x.\n3x + 1 = 10");
    }

    #[test]
    fn prompt_on_first_line_is_not_split() {
        // The scan stops at the top; a first-line prompt yields no passage.
        let region = "What is X?\nsupporting detail";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert!(passage.is_empty());
        assert_eq!(prompt, "What is X?\nsupporting detail");
    }

    #[test]
    fn multi_line_prompt_keeps_trailing_lines_together() {
        let region = "Passage.\nWhich choice completes the text?\n(continued)";
        let (passage, prompt) = split_passage_and_prompt(region);

        assert_eq!(passage, "Passage.");
        assert_eq!(prompt, "Which choice completes the text?\n(continued)");
    }
}
