use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::section::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parses a difficulty label case-insensitively, falling back to medium
    /// for anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

/// A structured question as recovered from one raw block, before any test
/// assignment. `test_id` is deliberately absent: it is assigned only at
/// assembly time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub section: Section,
    pub question_text: String,
    /// Empty string when the block had no supporting passage.
    pub passage: String,
    /// Empty for grid-in (free-response) items.
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub points: i32,
}

/// The persisted question record. Field names match the document store's
/// existing collections (`questionText`, `correctAnswer`, ...).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub test_id: String,
    pub section: Section,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub passage: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn from_parsed(parsed: ParsedQuestion, test_id: &str) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            test_id: test_id.to_string(),
            section: parsed.section,
            question_text: parsed.question_text,
            passage: parsed.passage,
            choices: parsed.choices,
            correct_answer: parsed.correct_answer,
            explanation: parsed.explanation,
            difficulty: parsed.difficulty,
            points: parsed.points,
            created_at: Some(Utc::now()),
        }
    }
}
