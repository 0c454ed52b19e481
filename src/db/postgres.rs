use super::{assign_id, ReviewStore, StoreError};
use crate::db;
use crate::models;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

/// Stores each review as a JSONB document in the `reviews` table.
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the schema in `./migrations`.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

fn decode(document: Value) -> Result<models::Review, StoreError> {
    serde_json::from_value(document).map_err(|err| {
        tracing::error!("Failed to decode review document: {:?}", err);
        StoreError::from(err)
    })
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn get(&self, id: &str) -> Result<Option<models::Review>, StoreError> {
        db::review::fetch(&self.pool, id)
            .await?
            .map(decode)
            .transpose()
    }

    async fn get_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<models::Review>, StoreError> {
        db::review::fetch_by_product(&self.pool, product_id)
            .await?
            .map(decode)
            .transpose()
    }

    async fn get_all(&self) -> Result<Vec<models::Review>, StoreError> {
        db::review::fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    async fn put(&self, mut review: models::Review) -> Result<models::Review, StoreError> {
        let id = assign_id(&mut review);
        let document = serde_json::to_value(&review)?;

        let stored = db::review::upsert(&self.pool, &id, review.product_id, document)
            .await
            .map_err(|err| {
                tracing::error!("Failed to execute query: {:?}", err);
                err
            })?;

        tracing::debug!("Review {} has been saved to database", id);
        decode(stored)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let deleted = db::review::delete(&self.pool, id).await?;
        tracing::debug!("Deleted {} review document(s) with id {}", deleted, id);
        Ok(())
    }
}
