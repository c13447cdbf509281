//! Driven port for peak persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{BoundingBox, PageRequest, Peak, PeakDraft, PeakId, PeakPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by peak repository adapters.
    pub enum PeakRepositoryError {
        /// The backing store could not be reached.
        Connection { message } => "peak repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message } => "peak repository query failed: {message}",
    }
}

/// Record store holding every peak, keyed by integer identifier.
///
/// Lookups by identifier return `None` for unknown peaks; the service layer
/// decides how to surface that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeakRepository: Send + Sync {
    /// Store a new peak and return it with its freshly assigned identifier.
    async fn insert(&self, draft: &PeakDraft) -> Result<Peak, PeakRepositoryError>;

    /// Fetch one peak.
    async fn find_by_id(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError>;

    /// Return a window of peaks ordered by ascending identifier.
    async fn list(&self, page: PageRequest) -> Result<Vec<Peak>, PeakRepositoryError>;

    /// Overwrite the fields carried by `patch` and return the stored result.
    ///
    /// An empty patch leaves the record untouched and returns it as stored.
    async fn update(
        &self,
        id: PeakId,
        patch: &PeakPatch,
    ) -> Result<Option<Peak>, PeakRepositoryError>;

    /// Remove a peak, returning the record as it was before removal.
    async fn delete(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError>;

    /// Every peak inside the box, edges included, by ascending identifier.
    async fn find_within(&self, bbox: &BoundingBox) -> Result<Vec<Peak>, PeakRepositoryError>;
}
