#![allow(dead_code)]

use review_service::configuration::{get_configuration, DatabaseSettings};
use review_service::db::{InMemoryReviewStore, PgReviewStore, ReviewStore};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn ReviewStore>,
}

pub async fn spawn_app_with_store(store: Arc<dyn ReviewStore>) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = review_service::startup::run(listener, store.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp { address, store }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(InMemoryReviewStore::new())).await
}

/// A store backed by a fresh, migrated database, or `None` when postgres is unreachable.
pub async fn postgres_store() -> Option<PgReviewStore> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    match configure_database(&configuration.database).await {
        Ok(pool) => {
            let store = PgReviewStore::new(pool);
            store.migrate().await.expect("Failed to migrate database");
            Some(store)
        }
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            None
        }
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    PgPool::connect(&config.connection_string()).await
}
