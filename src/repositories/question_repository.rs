use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Bulk-inserts a group of questions, returning their ids in insertion
    /// order.
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<Vec<String>>;
    async fn insert_one(&self, question: Question) -> AppResult<Question>;
    async fn find_by_test_id(&self, test_id: &str) -> AppResult<Vec<Question>>;
    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let test_id_index = IndexModel::builder()
            .keys(doc! { "testId": 1 })
            .options(IndexOptions::builder().name("testId_idx".to_string()).build())
            .build();

        self.collection.create_index(test_id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn insert_many(&self, questions: Vec<Question>) -> AppResult<Vec<String>> {
        if questions.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
        self.collection.insert_many(&questions).await?;
        Ok(ids)
    }

    async fn insert_one(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_test_id(&self, test_id: &str) -> AppResult<Vec<Question>> {
        use futures::TryStreamExt;

        let cursor = self.collection.find(doc! { "testId": test_id }).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
