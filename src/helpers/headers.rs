use crate::models::Review;
use actix_web::http::header::{self, EntityTag, HeaderValue, InvalidHeaderValue, ETag};
use actix_web::http::uri::{InvalidUri, Uri};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("invalid URI: {0}")]
    Uri(#[from] InvalidUri),
    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

/// `/review/{id}` as a header value. The id is not escaped, so one that does not
/// form a valid URI path (a space, a control character) is an error.
pub fn location(review: &Review) -> Result<HeaderValue, LocationError> {
    let uri: Uri = format!("/review/{}", review.persisted_id().unwrap_or_default()).parse()?;
    Ok(HeaderValue::try_from(uri.to_string())?)
}

/// The version, quoted, e.g. `"3"`.
pub fn etag(review: &Review) -> ETag {
    ETag(EntityTag::new_strong(review.version.to_string()))
}

/// Review body with `ETag` and `Location` headers. A review whose location is not a
/// valid URI yields an empty 500.
pub fn review_response(status: StatusCode, review: &Review) -> HttpResponse {
    let location = match location(review) {
        Ok(location) => location,
        Err(err) => {
            tracing::error!(
                "Failed to build location for review {:?}: {}",
                review.id,
                err
            );
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::build(status)
        .insert_header(etag(review))
        .insert_header((header::LOCATION, location))
        .json(review)
}
