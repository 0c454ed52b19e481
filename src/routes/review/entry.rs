use crate::forms;
use crate::helpers::{self, JsonResponse};
use crate::models;
use crate::services::ReviewService;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;

/// POST /review/{productId}/entry
/// Appends an entry to the product's review, starting a new review when the product has none.
#[tracing::instrument(name = "Add review entry.", skip(service))]
#[post("/{product_id}/entry")]
pub async fn entry_handler(
    path: web::Path<(i32,)>,
    form: web::Json<forms::EntryForm>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let product_id = path.into_inner().0;
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let mut review = service
        .find_by_product_id(product_id)
        .await?
        .unwrap_or_else(|| models::Review::new(product_id));
    review.entries.push(form.into());

    // create path: the version goes back to 1 even for an existing review
    let review = service.save(review).await?;

    Ok(helpers::review_response(StatusCode::OK, &review))
}
