use serde_json::Value;
use sqlx::PgPool;
use tracing::Instrument;

#[derive(Debug, sqlx::FromRow)]
pub struct ReviewDocument {
    pub document: Value,
}

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<Value>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch review document by id.", review_id = %id);
    sqlx::query_as::<_, ReviewDocument>(r"SELECT document FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map(|row| row.map(|row| row.document))
}

pub async fn fetch_by_product(pool: &PgPool, product_id: i32) -> Result<Option<Value>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch review document by product id.", product_id);
    sqlx::query_as::<_, ReviewDocument>(
        r#"SELECT document
         FROM reviews
         WHERE product_id = $1
         ORDER BY seq
         LIMIT 1
         "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|row| row.map(|row| row.document))
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Value>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch all review documents.");
    sqlx::query_as::<_, ReviewDocument>(r"SELECT document FROM reviews ORDER BY seq")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map(|rows| rows.into_iter().map(|row| row.document).collect())
}

pub async fn upsert(
    pool: &PgPool,
    id: &str,
    product_id: i32,
    document: Value,
) -> Result<Value, sqlx::Error> {
    let query_span = tracing::info_span!("Saving review document into the database", review_id = %id);
    sqlx::query_as::<_, ReviewDocument>(
        r#"
        INSERT INTO reviews (id, product_id, document, created_at, updated_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc', NOW() at time zone 'utc')
        ON CONFLICT (id)
        DO UPDATE SET product_id = EXCLUDED.product_id,
                      document = EXCLUDED.document,
                      updated_at = NOW() at time zone 'utc'
        RETURNING document
        "#,
    )
    .bind(id)
    .bind(product_id)
    .bind(document)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|row| row.document)
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Delete review document.", review_id = %id);
    sqlx::query(r"DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
}
