//! In-process peak store used when no database is configured.
//!
//! Identifiers come from a counter that only moves forward, so deleted ids
//! are never handed out again, matching the PostgreSQL serial column.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{PeakRepository, PeakRepositoryError};
use crate::domain::{BoundingBox, PageRequest, Peak, PeakDraft, PeakId, PeakPatch};

#[derive(Debug)]
struct Store {
    next_id: i32,
    peaks: BTreeMap<PeakId, Peak>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            peaks: BTreeMap::new(),
        }
    }
}

/// [`PeakRepository`] backed by a `BTreeMap` behind an `RwLock`.
///
/// Locks are held for a single operation and never across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryPeakRepository {
    store: RwLock<Store>,
}

impl InMemoryPeakRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> PeakRepositoryError {
    PeakRepositoryError::connection("in-memory peak store lock poisoned")
}

#[async_trait]
impl PeakRepository for InMemoryPeakRepository {
    async fn insert(&self, draft: &PeakDraft) -> Result<Peak, PeakRepositoryError> {
        let mut store = self.store.write().map_err(poisoned)?;
        let id = PeakId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| PeakRepositoryError::query("peak identifier space exhausted"))?;
        let peak = draft.clone().into_peak(id);
        store.peaks.insert(id, peak.clone());
        Ok(peak)
    }

    async fn find_by_id(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.peaks.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Peak>, PeakRepositoryError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store
            .peaks
            .values()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: PeakId,
        patch: &PeakPatch,
    ) -> Result<Option<Peak>, PeakRepositoryError> {
        let mut store = self.store.write().map_err(poisoned)?;
        Ok(store.peaks.get_mut(&id).map(|peak| {
            peak.apply(patch);
            peak.clone()
        }))
    }

    async fn delete(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError> {
        let mut store = self.store.write().map_err(poisoned)?;
        Ok(store.peaks.remove(&id))
    }

    async fn find_within(&self, bbox: &BoundingBox) -> Result<Vec<Peak>, PeakRepositoryError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store
            .peaks
            .values()
            .filter(|peak| bbox.contains(peak.latitude(), peak.longitude()))
            .cloned()
            .collect())
    }
}
