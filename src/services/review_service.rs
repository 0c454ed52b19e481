//! Review Service - version bookkeeping on top of the review store.
//!
//! `save` is the create path and always starts the review at version 1.
//! `update` bumps the version by one. Neither compares the caller's version with
//! what is stored, so concurrent writers simply overwrite each other.

use crate::db::{ReviewStore, StoreError};
use crate::models::Review;
use std::sync::Arc;

/// Result type for review operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Review>> {
        self.store.get(id).await
    }

    pub async fn find_by_product_id(&self, product_id: i32) -> Result<Option<Review>> {
        self.store.get_by_product_id(product_id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Review>> {
        self.store.get_all().await
    }

    /// Persists the review as version 1, whatever version it carried before.
    pub async fn save(&self, mut review: Review) -> Result<Review> {
        review.version = 1;
        let saved = self.store.put(review).await?;
        tracing::info!(
            review_id = saved.persisted_id().unwrap_or_default(),
            product_id = saved.product_id,
            entries = saved.entries.len(),
            "Saved review"
        );
        Ok(saved)
    }

    /// Persists the review with its version incremented by one.
    /// A review already at `i32::MAX` is rejected and left unwritten.
    pub async fn update(&self, mut review: Review) -> Result<Review> {
        review.version = review
            .version
            .checked_add(1)
            .ok_or_else(|| StoreError::VersionOverflow(review.id.clone()))?;
        let updated = self.store.put(review).await?;
        tracing::info!(
            review_id = updated.persisted_id().unwrap_or_default(),
            version = updated.version,
            "Updated review"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_by_id(id).await?;
        tracing::info!(review_id = %id, "Deleted review");
        Ok(())
    }
}
