use crate::services::ReviewService;
use actix_web::{delete, web, HttpResponse, Result};

/// DELETE /review/{id}
/// Takes the review id, not the product id.
#[tracing::instrument(name = "Delete review.", skip(service))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    service: web::Data<ReviewService>,
) -> Result<HttpResponse> {
    let id = path.into_inner().0;
    match service.find_by_id(&id).await? {
        Some(_) => {
            service.delete(&id).await?;
            Ok(HttpResponse::Ok().finish())
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
