use crate::helpers;
use crate::models;
use crate::services::ReviewService;
use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "productId")]
    pub product_id: Option<i32>,
}

/// GET /review/{id}
#[tracing::instrument(name = "Get review.", skip(service))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let id = path.into_inner().0;
    match service.find_by_id(&id).await? {
        Some(review) => Ok(helpers::review_response(StatusCode::OK, &review)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// GET /reviews?productId={productId}
/// Without `productId` every review is returned; with it, the product's review if there is one.
#[tracing::instrument(name = "List reviews.", skip(service))]
#[get("/reviews")]
pub async fn list_handler(
    query: web::Query<ListQuery>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let reviews: Vec<models::Review> = match query.product_id {
        Some(product_id) => service
            .find_by_product_id(product_id)
            .await?
            .into_iter()
            .collect(),
        None => service.find_all().await?,
    };

    Ok(web::Json(reviews))
}
