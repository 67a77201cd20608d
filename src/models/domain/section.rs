use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject grouping used both to tag questions and to describe a test's
/// composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Section {
    #[serde(rename = "Reading and Writing")]
    ReadingAndWriting,
    #[serde(rename = "Math")]
    Math,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::ReadingAndWriting, Section::Math];

    pub fn label(self) -> &'static str {
        match self {
            Section::ReadingAndWriting => "Reading and Writing",
            Section::Math => "Math",
        }
    }

    /// Fixed per-section time allotment in minutes. Configuration, not
    /// derived from the questions.
    pub fn time_limit_minutes(self) -> i32 {
        match self {
            Section::ReadingAndWriting => 64,
            Section::Math => 70,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_serializes_as_display_string() {
        let json = serde_json::to_string(&Section::ReadingAndWriting).unwrap();
        assert_eq!(json, "\"Reading and Writing\"");

        let parsed: Section = serde_json::from_str("\"Math\"").unwrap();
        assert_eq!(parsed, Section::Math);
    }

    #[test]
    fn section_time_limits_sum_to_total() {
        let total: i32 = Section::ALL.iter().map(|s| s.time_limit_minutes()).sum();
        assert_eq!(total, 134);
    }
}
