use crate::forms;
use crate::helpers::{self, JsonResponse};
use crate::services::ReviewService;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;

/// POST /review
/// Creates the review at version 1. An `id` in the body overwrites that document.
#[tracing::instrument(name = "Create review.", skip(service))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ReviewForm>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    tracing::info!("Creating new review for product id: {}", form.product_id);
    let review = service.save(form.into()).await?;

    Ok(helpers::review_response(StatusCode::CREATED, &review))
}
