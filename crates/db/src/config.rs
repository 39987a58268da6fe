//! Database connection configuration.
//!
//! Loaded once at startup and validated up front: a missing credential is a
//! refusal to start, never a surprise inside an invocation.

use std::time::Duration;

/// Default MySQL port when `DB_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3306;

/// Fixed deadline for establishing a session.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// A configuration problem detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Connection parameters for the per-invocation session.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var       | Required | Default |
    /// |---------------|----------|---------|
    /// | `DB_HOST`     | yes      | --      |
    /// | `DB_USER`     | yes      | --      |
    /// | `DB_PASSWORD` | yes      | --      |
    /// | `DB_NAME`     | yes      | --      |
    /// | `DB_PORT`     | no       | `3306`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("DB_PORT") {
            Ok(raw) if !raw.is_empty() => {
                raw.parse()
                    .map_err(|_| ConfigError::InvalidVar {
                        name: "DB_PORT",
                        value: raw,
                    })?
            }
            _ => DEFAULT_PORT,
        };

        Ok(Self {
            host: require("DB_HOST")?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_NAME")?,
            port,
        })
    }
}

/// Read a required variable; empty counts as missing.
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
