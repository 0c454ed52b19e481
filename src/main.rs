use anyhow::Context;
use review_service::configuration::{get_configuration, Settings, StorageKind};
use review_service::db::{InMemoryReviewStore, PgReviewStore, ReviewStore};
use review_service::startup::run;
use review_service::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("review-service".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;
    let store = build_store(&settings).await?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, store).await?.await?;
    Ok(())
}

async fn build_store(settings: &Settings) -> anyhow::Result<Arc<dyn ReviewStore>> {
    match settings.storage {
        StorageKind::Memory => {
            tracing::warn!("Using in-memory review storage; reviews are lost on restart");
            Ok(Arc::new(InMemoryReviewStore::new()))
        }
        StorageKind::Postgres => {
            tracing::info!(
                db_host = %settings.database.host,
                db_port = settings.database.port,
                db_name = %settings.database.database_name,
                "Connecting to PostgreSQL"
            );

            let connect_options = PgConnectOptions::new()
                .host(&settings.database.host)
                .port(settings.database.port)
                .username(&settings.database.username)
                .password(&settings.database.password)
                .database(&settings.database.database_name)
                .ssl_mode(PgSslMode::Disable);

            let pg_pool = PgPoolOptions::new()
                .max_connections(settings.database.max_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect_with(connect_options)
                .await
                .context("Failed to connect to database.")?;

            let store = PgReviewStore::new(pg_pool);
            store
                .migrate()
                .await
                .context("Failed to apply database migrations.")?;

            Ok(Arc::new(store))
        }
    }
}
