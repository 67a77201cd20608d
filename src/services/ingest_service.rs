use log::{info, warn};

use crate::models::domain::{ParsedQuestion, Section};
use crate::parser::{self, splitter};

/// Per-subject parse outcome counts, reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub parsed: usize,
    pub discarded: usize,
}

pub struct SubjectIngest {
    pub section: Section,
    pub questions: Vec<ParsedQuestion>,
    pub stats: IngestStats,
}

/// Parses one subject's raw text into structured questions. Malformed
/// blocks are logged and skipped; the batch never fails on a bad block.
pub fn parse_subject(raw_text: &str, section: Section) -> SubjectIngest {
    let text = splitter::normalize(raw_text);

    let mut questions = Vec::new();
    let mut stats = IngestStats::default();

    for block in splitter::split_blocks(&text) {
        match parser::parse_block(block, section) {
            Ok(question) => {
                stats.parsed += 1;
                questions.push(question);
            }
            Err(discard) => {
                stats.discarded += 1;
                warn!("Skipping {} in {}", discard, section);
            }
        }
    }

    info!(
        "Parsed {} {} questions ({} discarded)",
        stats.parsed, section, stats.discarded
    );

    SubjectIngest {
        section,
        questions,
        stats,
    }
}
