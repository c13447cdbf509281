//! Peak domain service.
//!
//! Implements the peak driving ports on top of a [`PeakRepository`], turning
//! missing records into `not_found` errors and store failures into
//! transport-neutral domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{PeakCommand, PeakQuery, PeakRepository, PeakRepositoryError};
use crate::domain::{BoundingBox, Error, PageRequest, Peak, PeakDraft, PeakId, PeakPatch};

/// Message returned for unknown peak identifiers.
pub const PEAK_NOT_FOUND: &str = "Peak not found";

fn map_repository_error(err: PeakRepositoryError) -> Error {
    match err {
        PeakRepositoryError::Connection { message } => {
            warn!(error = %message, "peak store unavailable");
            Error::service_unavailable("peak store unavailable")
        }
        PeakRepositoryError::Query { message } => {
            error!(error = %message, "peak store query failed");
            Error::internal(format!("peak repository error: {message}"))
        }
    }
}

fn not_found(id: PeakId) -> Error {
    debug!(peak_id = %id, "peak not found");
    Error::not_found(PEAK_NOT_FOUND)
}

/// Service implementing [`PeakCommand`] and [`PeakQuery`].
pub struct PeakService<R> {
    repo: Arc<R>,
}

impl<R> PeakService<R> {
    /// Create a service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> Clone for PeakService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

#[async_trait]
impl<R> PeakCommand for PeakService<R>
where
    R: PeakRepository,
{
    async fn create_peak(&self, draft: PeakDraft) -> Result<Peak, Error> {
        let peak = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(peak_id = %peak.id(), name = peak.name(), "peak created");
        Ok(peak)
    }

    async fn update_peak(&self, id: PeakId, patch: PeakPatch) -> Result<Peak, Error> {
        let peak = self
            .repo
            .update(id, &patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;
        info!(peak_id = %id, unchanged = patch.is_empty(), "peak updated");
        Ok(peak)
    }

    async fn delete_peak(&self, id: PeakId) -> Result<Peak, Error> {
        let peak = self
            .repo
            .delete(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;
        info!(peak_id = %id, "peak deleted");
        Ok(peak)
    }
}

#[async_trait]
impl<R> PeakQuery for PeakService<R>
where
    R: PeakRepository,
{
    async fn get_peak(&self, id: PeakId) -> Result<Peak, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn list_peaks(&self, page: PageRequest) -> Result<Vec<Peak>, Error> {
        let peaks = self.repo.list(page).await.map_err(map_repository_error)?;
        debug!(
            offset = page.offset(),
            limit = page.limit(),
            returned = peaks.len(),
            "listed peaks"
        );
        Ok(peaks)
    }

    async fn search_peaks(&self, bbox: BoundingBox) -> Result<Vec<Peak>, Error> {
        let peaks = self
            .repo
            .find_within(&bbox)
            .await
            .map_err(map_repository_error)?;
        debug!(
            min_lat = bbox.min_lat(),
            max_lat = bbox.max_lat(),
            min_lon = bbox.min_lon(),
            max_lon = bbox.max_lon(),
            matched = peaks.len(),
            "searched peaks"
        );
        Ok(peaks)
    }
}

#[cfg(test)]
#[path = "peak_service_tests.rs"]
mod tests;
