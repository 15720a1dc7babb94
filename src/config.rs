// src/config.rs

use std::env;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// SQLite file used as the local key/value store.
    pub db_path: String,
    /// Schema applied on startup.
    pub schema_path: String,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "estatehub.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    /// Read `ESTATEHUB_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(value) = lookup("ESTATEHUB_ADDR") {
            cfg.addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: "ESTATEHUB_ADDR",
                expected: "socket address",
                value,
            })?;
        }
        if let Some(value) = lookup("ESTATEHUB_DB") {
            cfg.db_path = value;
        }
        if let Some(value) = lookup("ESTATEHUB_SCHEMA") {
            cfg.schema_path = value;
        }
        if let Some(value) = lookup("ESTATEHUB_WORKERS") {
            cfg.max_workers = value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "ESTATEHUB_WORKERS",
                    expected: "positive integer",
                    value,
                })?;
        }

        Ok(cfg)
    }
}
