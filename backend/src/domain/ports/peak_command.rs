//! Driving port for peak mutations.

use async_trait::async_trait;

use crate::domain::{Error, Peak, PeakDraft, PeakId, PeakPatch};

/// Driving port used by inbound adapters to change stored peaks.
///
/// Failures arrive as domain [`Error`]s already classified for transport:
/// unknown identifiers as `not_found`, store outages as
/// `service_unavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeakCommand: Send + Sync {
    /// Store a new peak.
    async fn create_peak(&self, draft: PeakDraft) -> Result<Peak, Error>;

    /// Apply a patch to an existing peak.
    async fn update_peak(&self, id: PeakId, patch: PeakPatch) -> Result<Peak, Error>;

    /// Delete a peak, returning its last stored state.
    async fn delete_peak(&self, id: PeakId) -> Result<Peak, Error>;
}
