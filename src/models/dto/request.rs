use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, ParsedQuestion, Question, Section};

/// Payload for an individually authored question. This is the strict
/// storage contract: batch-ingested questions may have zero choices
/// (grid-ins) and are not required to pass it.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_correct_answer))]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "Test ID is required"))]
    pub test_id: String,

    pub section: Section,

    #[validate(length(min = 1, message = "Question text is required"))]
    pub question_text: String,

    #[serde(default)]
    pub passage: String,

    #[validate(length(min = 2, message = "At least two choices are required"))]
    pub choices: Vec<String>,

    #[validate(length(min = 1, message = "Correct answer is required"))]
    pub correct_answer: String,

    #[validate(length(min = 1, message = "Explanation is required"))]
    pub explanation: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[validate(range(min = 1, message = "Points must be at least 1"))]
    pub points: i32,
}

/// The correct answer must equal one of the choices by string value, not by
/// positional label.
fn validate_correct_answer(request: &CreateQuestionRequest) -> Result<(), ValidationError> {
    if request.choices.iter().any(|c| c == &request.correct_answer) {
        Ok(())
    } else {
        let mut error = ValidationError::new("correct_answer");
        error.message = Some("Correct answer must exactly equal one of the choices".into());
        Err(error)
    }
}

impl From<CreateQuestionRequest> for Question {
    fn from(request: CreateQuestionRequest) -> Self {
        let parsed = ParsedQuestion {
            section: request.section,
            question_text: request.question_text,
            passage: request.passage,
            choices: request.choices,
            correct_answer: request.correct_answer,
            explanation: request.explanation,
            difficulty: request.difficulty,
            points: request.points,
        };
        Question::from_parsed(parsed, &request.test_id)
    }
}
