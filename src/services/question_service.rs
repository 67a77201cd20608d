use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;
use crate::models::dto::CreateQuestionRequest;
use crate::repositories::{QuestionRepository, TestRepository};

/// Storage path for individually authored questions. Unlike the batch
/// pipeline, this path enforces the strict contract: at least two choices
/// and a correct answer that matches one of them.
pub struct QuestionService {
    question_repository: Arc<dyn QuestionRepository>,
    test_repository: Arc<dyn TestRepository>,
}

impl QuestionService {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        test_repository: Arc<dyn TestRepository>,
    ) -> Self {
        Self {
            question_repository,
            test_repository,
        }
    }

    pub async fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let test = self
            .test_repository
            .find_by_id(&request.test_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Test with id '{}' not found", request.test_id))
            })?;

        let question = self
            .question_repository
            .insert_one(Question::from(request))
            .await?;

        let mut question_ids = test.questions;
        question_ids.push(question.id.clone());
        self.test_repository
            .set_questions(&test.id, question_ids)
            .await?;

        Ok(question)
    }

    pub async fn questions_for_test(&self, test_id: &str) -> AppResult<Vec<Question>> {
        self.question_repository.find_by_test_id(test_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, Section, Test};
    use crate::repositories::question_repository::MockQuestionRepository;
    use crate::repositories::test_repository::MockTestRepository;

    fn valid_request(test_id: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            test_id: test_id.to_string(),
            section: Section::Math,
            question_text: "What is 2 + 2?".to_string(),
            passage: String::new(),
            choices: vec!["3".into(), "4".into()],
            correct_answer: "4".to_string(),
            explanation: "Basic addition.".to_string(),
            difficulty: Difficulty::Easy,
            points: 10,
        }
    }

    fn stored_test(id: &str) -> Test {
        let mut test = Test::new("Imported SAT Practice Test 1", 134, Difficulty::Medium, vec![]);
        test.id = id.to_string();
        test.questions = vec!["existing-q".to_string()];
        test
    }

    #[tokio::test]
    async fn creates_question_and_appends_id_to_test() {
        let mut question_repository = MockQuestionRepository::new();
        let mut test_repository = MockTestRepository::new();

        test_repository
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_test(id))));

        question_repository
            .expect_insert_one()
            .times(1)
            .returning(Ok);

        test_repository
            .expect_set_questions()
            .times(1)
            .withf(|test_id, ids| test_id == "test-1" && ids.len() == 2 && ids[0] == "existing-q")
            .returning(|_, _| Ok(()));

        let service = QuestionService::new(
            Arc::new(question_repository),
            Arc::new(test_repository),
        );

        let question = service.create_question(valid_request("test-1")).await.unwrap();
        assert_eq!(question.test_id, "test-1");
    }

    #[tokio::test]
    async fn rejects_invalid_request_before_touching_the_store() {
        let question_repository = MockQuestionRepository::new();
        let test_repository = MockTestRepository::new();

        let service = QuestionService::new(
            Arc::new(question_repository),
            Arc::new(test_repository),
        );

        let mut request = valid_request("test-1");
        request.correct_answer = "not a choice".to_string();

        let err = service.create_question(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn unknown_test_is_not_found() {
        let question_repository = MockQuestionRepository::new();
        let mut test_repository = MockTestRepository::new();

        test_repository.expect_find_by_id().returning(|_| Ok(None));

        let service = QuestionService::new(
            Arc::new(question_repository),
            Arc::new(test_repository),
        );

        let err = service
            .create_question(valid_request("missing"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
