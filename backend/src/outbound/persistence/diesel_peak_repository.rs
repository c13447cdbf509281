//! PostgreSQL-backed `PeakRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPeakRow, PeakChangeset, PeakRow};
use super::pool::DbPool;
use super::schema::peaks;
use crate::domain::ports::{PeakRepository, PeakRepositoryError};
use crate::domain::{BoundingBox, PageRequest, Peak, PeakDraft, PeakId, PeakPatch};

/// Diesel-backed implementation of the [`PeakRepository`] port.
#[derive(Clone)]
pub struct DieselPeakRepository {
    pool: DbPool,
}

impl DieselPeakRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeakRepository for DieselPeakRepository {
    async fn insert(&self, draft: &PeakDraft) -> Result<Peak, PeakRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(peaks::table)
            .values(NewPeakRow::from(draft))
            .returning(PeakRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Peak::from)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        peaks::table
            .find(id.get())
            .select(PeakRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Peak::from))
            .map_err(map_diesel_error)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Peak>, PeakRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PeakRow> = peaks::table
            .select(PeakRow::as_select())
            .order(peaks::id.asc())
            .offset(i64::from(page.offset()))
            .limit(i64::from(page.limit()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Peak::from).collect())
    }

    async fn update(
        &self,
        id: PeakId,
        patch: &PeakPatch,
    ) -> Result<Option<Peak>, PeakRepositoryError> {
        // Diesel rejects an empty SET clause.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(peaks::table.find(id.get()))
            .set(PeakChangeset::from(patch))
            .returning(PeakRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Peak::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: PeakId) -> Result<Option<Peak>, PeakRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(peaks::table.find(id.get()))
            .returning(PeakRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Peak::from))
            .map_err(map_diesel_error)
    }

    async fn find_within(&self, bbox: &BoundingBox) -> Result<Vec<Peak>, PeakRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PeakRow> = peaks::table
            .filter(peaks::latitude.between(bbox.min_lat(), bbox.max_lat()))
            .filter(peaks::longitude.between(bbox.min_lon(), bbox.max_lon()))
            .select(PeakRow::as_select())
            .order(peaks::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Peak::from).collect())
    }
}
