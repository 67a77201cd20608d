//! Recovers structured questions from the raw text extracted out of
//! exam-prep PDFs. Splitting never fails; each block either parses into a
//! [`ParsedQuestion`](crate::models::domain::ParsedQuestion) or is discarded
//! with a reason, and the batch carries on.

pub mod block;
pub mod fields;
pub mod splitter;

use std::fmt;

pub use block::parse_block;
pub use splitter::split_blocks;

/// Why a block was rejected. Each reason is surfaced as a warning with the
/// block's diagnostic id so operators can find the offending source span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// The answer-key marker (`ID: <hex> Answer`) never appeared, so the
    /// block cannot be separated into question and answer parts.
    MissingAnswerMarker,
    MissingText,
    MissingAnswer,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DiscardReason::MissingAnswerMarker => "no answer-key marker",
            DiscardReason::MissingText => "missing text",
            DiscardReason::MissingAnswer => "missing correct answer",
        };
        f.write_str(reason)
    }
}

/// A rejected block: the diagnostic id (when the block carried one) plus the
/// reason. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockDiscard {
    pub block_id: Option<String>,
    pub reason: DiscardReason,
}

impl fmt::Display for BlockDiscard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block_id {
            Some(id) => write!(f, "block {}: {}", id, self.reason),
            None => write!(f, "unidentified block: {}", self.reason),
        }
    }
}
