//! Review persistence.
//!
//! Every review is one document, addressed by its `id`. Handlers and services only ever
//! see the [`ReviewStore`] trait, injected as `web::Data<Arc<dyn ReviewStore>>`, so the
//! backend can be swapped per environment:
//!
//! - [`PgReviewStore`]: JSONB documents in PostgreSQL (`storage: postgres`)
//! - [`InMemoryReviewStore`]: process-local map (`storage: memory`, tests)
//!
//! ```ignore
//! let store: Arc<dyn ReviewStore> = Arc::new(InMemoryReviewStore::default());
//! let saved = store.put(models::Review::new(1)).await?;
//! assert!(store.get(saved.persisted_id().unwrap()).await?.is_some());
//! ```

use crate::models;
use async_trait::async_trait;

pub mod errors;
pub mod memory;
pub mod postgres;
pub mod review;

pub use errors::StoreError;
pub use memory::InMemoryReviewStore;
pub use postgres::PgReviewStore;

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// `Ok(None)` when no document has this id.
    async fn get(&self, id: &str) -> Result<Option<models::Review>, StoreError>;

    /// First review stored for the product, if any. Product ids are not unique;
    /// with duplicates the earliest inserted document wins.
    async fn get_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<models::Review>, StoreError>;

    /// Every review, in insertion order.
    async fn get_all(&self) -> Result<Vec<models::Review>, StoreError>;

    /// Inserts the review when it has no id yet (a new id is assigned), otherwise
    /// replaces the document with the same id. Returns what was stored.
    async fn put(&self, review: models::Review) -> Result<models::Review, StoreError>;

    /// Removing an unknown id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Gives an unpersisted review its store id and returns that id.
pub(crate) fn assign_id(review: &mut models::Review) -> String {
    match review.persisted_id() {
        Some(id) => id.to_string(),
        None => {
            let id = uuid::Uuid::new_v4().to_string();
            review.id = Some(id.clone());
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_id_keeps_an_existing_id() {
        let mut review = models::Review::new(1);
        review.id = Some("fixed".to_string());

        assert_eq!(assign_id(&mut review), "fixed");
        assert_eq!(review.id.as_deref(), Some("fixed"));
    }

    #[test]
    fn assign_id_replaces_missing_or_empty_ids() {
        let mut missing = models::Review::new(1);
        let mut empty = models::Review::new(1);
        empty.id = Some(String::new());

        let first = assign_id(&mut missing);
        let second = assign_id(&mut empty);

        assert!(uuid::Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
        assert_eq!(empty.id.as_deref(), Some(second.as_str()));
    }
}
