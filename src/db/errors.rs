use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors raised by a [`super::ReviewStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A stored document does not match the review schema, or a review could not be encoded.
    #[error("Malformed review document: {0}")]
    Document(#[from] serde_json::Error),
    /// The version counter cannot be incremented any further.
    #[error("Review {0:?} has reached the maximum version")]
    VersionOverflow(Option<String>),
}

impl ResponseError for StoreError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!("Review store failure: {}", self);

        HttpResponse::build(self.status_code()).json(json!({
            "error": "Review storage unavailable",
            "details": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
