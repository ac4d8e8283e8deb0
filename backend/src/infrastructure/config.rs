// Layered runtime settings: defaults, optional files, then EVENTS__* env vars

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const MIN_JWT_KEY_BYTES: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl ServerSettings {
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server address: {e}")))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// No `url` means the process runs against the in-memory store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize)]
pub struct SecuritySettings {
    pub jwt_key: SecretString,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expiry_minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Settings {
    /// Reads `.env`, then `config/default`, `config/local` and the
    /// environment, later sources winning.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let raw = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("EVENTS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(raw)
    }

    fn from_config(raw: Config) -> Result<Self, ConfigError> {
        let settings: Settings = raw.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.security.jwt_key.expose_secret().len() < MIN_JWT_KEY_BYTES {
            return Err(ConfigError::Invalid(format!(
                "security.jwt_key must be at least {MIN_JWT_KEY_BYTES} bytes"
            )));
        }
        if self.security.jwt_expiry_minutes == 0 {
            return Err(ConfigError::Invalid(
                "security.jwt_expiry_minutes must be greater than zero".to_string(),
            ));
        }
        if self.security.jwt_issuer.trim().is_empty() || self.security.jwt_audience.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "security.jwt_issuer and security.jwt_audience must be set".to_string(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.request_timeout_secs", 30)?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("database.run_migrations", true)?
        .set_default("security.jwt_issuer", "events-server")?
        .set_default("security.jwt_audience", "events-clients")?
        .set_default("security.jwt_expiry_minutes", 60)?
        .set_default("log.filter", "info")?
        .set_default("log.format", "text")?)
}
