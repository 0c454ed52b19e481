use crate::db::ReviewStore;
use crate::helpers::JsonResponse;
use crate::routes;
use crate::services::ReviewService;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ReviewStore>,
) -> Result<Server, std::io::Error> {
    let service = web::Data::new(ReviewService::new(store));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .app_data(service.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Routes and extractor settings, shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(web::scope("/health_check").service(routes::health_check))
        .service(routes::review::list_handler)
        .service(
            web::scope("/review")
                .service(routes::review::item_handler)
                .service(routes::review::add_handler)
                .service(routes::review::entry_handler)
                .service(routes::review::delete_handler),
        );
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "deserialize error at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => other.to_string(),
        };
        tracing::debug!("Rejected request body: {}", msg);
        JsonResponse::build().bad_request(msg)
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected query string: {}", err);
        JsonResponse::build().bad_request(err.to_string())
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected path segment: {}", err);
        JsonResponse::build().bad_request(err.to_string())
    })
}
