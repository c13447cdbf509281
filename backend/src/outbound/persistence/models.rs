//! Internal Diesel row structs for the `peaks` table.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain types field by field.

use diesel::prelude::*;

use super::schema::peaks;
use crate::domain::{Peak, PeakDraft, PeakId, PeakPatch};

/// Row read from `peaks`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = peaks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PeakRow {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl From<PeakRow> for Peak {
    fn from(row: PeakRow) -> Self {
        Self::from_parts(
            PeakId::new(row.id),
            row.name,
            row.latitude,
            row.longitude,
            row.altitude,
        )
    }
}

/// Insertable row for a new peak; the id comes from the serial sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = peaks)]
pub(crate) struct NewPeakRow<'a> {
    pub name: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl<'a> From<&'a PeakDraft> for NewPeakRow<'a> {
    fn from(draft: &'a PeakDraft) -> Self {
        Self {
            name: draft.name(),
            latitude: draft.latitude(),
            longitude: draft.longitude(),
            altitude: draft.altitude(),
        }
    }
}

/// Partial update; `None` columns are left out of the `SET` clause.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = peaks)]
pub(crate) struct PeakChangeset<'a> {
    pub name: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}

impl<'a> From<&'a PeakPatch> for PeakChangeset<'a> {
    fn from(patch: &'a PeakPatch) -> Self {
        Self {
            name: patch.name(),
            latitude: patch.latitude(),
            longitude: patch.longitude(),
            altitude: patch.altitude(),
        }
    }
}
