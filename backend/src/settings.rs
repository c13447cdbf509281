//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, configuration files, `PEAKS_*`
//! environment variables and command-line flags, in increasing precedence.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig,
};

/// Address the HTTP server binds to when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the peak service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PEAKS")]
pub struct ServiceSettings {
    /// PostgreSQL URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Socket address to listen on, e.g. `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Skip mounting Swagger UI at `/docs`.
    #[ortho_config(default = false)]
    pub disable_docs: bool,
}

impl ServiceSettings {
    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Bind address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured address is malformed.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Whether Swagger UI should be served.
    pub fn docs_enabled(&self) -> bool {
        !self.disable_docs
    }

    /// Pool configuration for the configured database, if any.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        let timeout = self
            .pool_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        Some(
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE))
                .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE)))
                .with_connection_timeout(timeout),
        )
    }
}
