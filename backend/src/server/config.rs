//! HTTP server configuration object and helpers.

use peak_service::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) docs_enabled: bool,
}

impl ServerConfig {
    /// Construct a configuration with no database and docs enabled.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            docs_enabled: true,
        }
    }

    /// Attach a database connection pool for the peak repository.
    ///
    /// Without a pool the server keeps peaks in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Toggle the Swagger UI and OpenAPI JSON routes.
    #[must_use]
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }
}
