use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Test};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestRepository: Send + Sync {
    async fn insert(&self, test: Test) -> AppResult<Test>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Test>>;
    /// Records the ids of the questions owned by a test. This is the only
    /// mutation a test sees after creation.
    async fn set_questions(&self, test_id: &str, question_ids: Vec<String>) -> AppResult<()>;
    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct MongoTestRepository {
    collection: Collection<Test>,
}

impl MongoTestRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl TestRepository for MongoTestRepository {
    async fn insert(&self, test: Test) -> AppResult<Test> {
        self.collection.insert_one(&test).await?;
        Ok(test)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Test>> {
        let test = self.collection.find_one(doc! { "id": id }).await?;
        Ok(test)
    }

    async fn set_questions(&self, test_id: &str, question_ids: Vec<String>) -> AppResult<()> {
        self.collection
            .update_one(
                doc! { "id": test_id },
                doc! { "$set": { "questions": question_ids } },
            )
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
