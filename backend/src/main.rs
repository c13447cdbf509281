//! Backend entry-point: loads configuration, prepares the record store and
//! serves the peak REST endpoints.

mod server;

use std::io;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use peak_service::outbound::persistence::{DbPool, run_pending_migrations_async};
use peak_service::settings::ServiceSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load `.env` first so it can supply `RUST_LOG`.
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "failed to load .env");
        }
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load configuration: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("invalid bind_addr: {e}")))?;

    let mut config = ServerConfig::new(bind_addr).with_docs(settings.docs_enabled());
    if let Some(pool_config) = settings.pool_config() {
        let applied = run_pending_migrations_async(pool_config.database_url().to_owned())
            .await
            .map_err(|e| io::Error::other(format!("failed to apply migrations: {e}")))?;
        info!(applied, "database migrations up to date");
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| io::Error::other(format!("failed to build database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await
}
