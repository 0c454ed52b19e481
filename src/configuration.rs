use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub storage: StorageKind,
    pub database: DatabaseSettings,
}

/// Which [`crate::db::ReviewStore`] backend the server runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    config::Config::builder()
        .set_default("app_host", "127.0.0.1")?
        .set_default("app_port", 8000)?
        .set_default("storage", "postgres")?
        .set_default("database.username", "postgres")?
        .set_default("database.password", "postgres")?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.database_name", "reviews")?
        // configuration.yaml (or .json, .toml) in the working directory
        .add_source(config::File::with_name("configuration").required(false))
        // e.g. APP_DATABASE__HOST=db overrides database.host
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
