//! Builders for the HTTP adapter state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use peak_service::inbound::http::state::HttpState;
use peak_service::outbound::memory::InMemoryPeakRepository;
use peak_service::outbound::persistence::DieselPeakRepository;

use super::ServerConfig;

/// Wire the peak ports to PostgreSQL when a pool is configured, otherwise to
/// an in-memory store that is lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_repository(Arc::new(DieselPeakRepository::new(pool.clone()))),
        None => {
            warn!("no database configured; peaks are kept in memory");
            HttpState::from_repository(Arc::new(InMemoryPeakRepository::new()))
        }
    };
    web::Data::new(state)
}
