//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::PeakService;
use crate::domain::ports::{PeakCommand, PeakQuery, PeakRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Peak mutations.
    pub peaks: Arc<dyn PeakCommand>,
    /// Peak reads.
    pub peaks_query: Arc<dyn PeakQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(peaks: Arc<dyn PeakCommand>, peaks_query: Arc<dyn PeakQuery>) -> Self {
        Self { peaks, peaks_query }
    }

    /// Wire both ports to a [`PeakService`] over `repo`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use peak_service::inbound::http::state::HttpState;
    /// use peak_service::outbound::memory::InMemoryPeakRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryPeakRepository::new()));
    /// let _query = state.peaks_query.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: PeakRepository + 'static,
    {
        let service = Arc::new(PeakService::new(repo));
        Self::new(service.clone(), service)
    }
}
