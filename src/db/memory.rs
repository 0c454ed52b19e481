use super::{assign_id, ReviewStore, StoreError};
use crate::models;
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Keeps reviews in process memory. Iteration follows insertion order, and
/// replacing a document keeps its original position.
#[derive(Default)]
pub struct InMemoryReviewStore {
    documents: RwLock<IndexMap<String, models::Review>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn get(&self, id: &str) -> Result<Option<models::Review>, StoreError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn get_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<models::Review>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .find(|review| review.product_id == product_id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<models::Review>, StoreError> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn put(&self, mut review: models::Review) -> Result<models::Review, StoreError> {
        let id = assign_id(&mut review);
        self.documents.write().await.insert(id, review.clone());
        Ok(review)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.documents.write().await.shift_remove(id);
        Ok(())
    }
}
