//! Driving port for peak reads.

use async_trait::async_trait;

use crate::domain::{BoundingBox, Error, PageRequest, Peak, PeakId};

/// Driving port used by inbound adapters to read stored peaks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeakQuery: Send + Sync {
    /// Fetch one peak, failing with `not_found` when it does not exist.
    async fn get_peak(&self, id: PeakId) -> Result<Peak, Error>;

    /// List a page of peaks by ascending identifier.
    async fn list_peaks(&self, page: PageRequest) -> Result<Vec<Peak>, Error>;

    /// Every peak inside the bounding box.
    async fn search_peaks(&self, bbox: BoundingBox) -> Result<Vec<Peak>, Error>;
}
