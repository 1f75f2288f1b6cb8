//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `HABITS_*` environment variables and config
//! files, in OrthoConfig's usual precedence. Everything is optional; the
//! accessors supply defaults.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

pub const DEFAULT_DATABASE_URL: &str = "postgres://hire:me@localhost:5432/hireme?sslmode=disable";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

/// Settings for the habit tracker server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HABITS")]
pub struct HabitSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl HabitSettings {
    /// Configured connection string, or [`DEFAULT_DATABASE_URL`].
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Configured pool size; [`DEFAULT_POOL_MAX_SIZE`] unless overridden.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    /// Parsed listener address.
    ///
    /// # Errors
    ///
    /// [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Pool configuration derived from these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url()).with_max_size(self.pool_max_size())
    }
}
