use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

pub use config::ConfigError;

/// Prefix for environment overrides, e.g. `EVENT_PULSE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "EVENT_PULSE";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub client: ClientSettings,
    pub reservations: ReservationSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

/// Event source HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub tick_interval_ms: u64,
}

/// Event stream consumer
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout_ms: u64,
}

/// Reservation and greeting server
#[derive(Debug, Deserialize, Clone)]
pub struct ReservationSettings {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub greeting_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
    /// Per-request log lines with status and timing
    pub request_logs: bool,
    /// A tracing span around every request
    pub trace_spans: bool,
}

impl Settings {
    /// Load settings from `config/` and the environment
    pub fn new() -> crate::Result<Self> {
        Ok(Self::load_from(Path::new("config"))?)
    }

    /// Load settings, reading optional config files from `config_dir`
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let file = |name: &str| File::from(config_dir.join(name)).required(false);

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.tick_interval_ms", 1000)?
            .set_default("client.base_url", "http://localhost:8080")?
            .set_default("client.connect_timeout_ms", 5000)?
            .set_default("reservations.host", "0.0.0.0")?
            .set_default("reservations.port", 8081)?
            .set_default("reservations.storage", "postgres")?
            .set_default("reservations.greeting_interval_ms", 1000)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "password")?
            .set_default("database.database_name", "event_pulse")?
            .set_default("database.max_connections", 10)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.request_logs", true)?
            .set_default("logging.trace_spans", true)?
            .add_source(file("default"))
            .add_source(file(&environment))
            .add_source(file("local"))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.database.username,
            self.database.password,
            self.database.host,
            self.database.port,
            self.database.database_name
        )
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl ClientSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl ReservationSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn greeting_interval(&self) -> Duration {
        Duration::from_millis(self.greeting_interval_ms)
    }
}
