//! Maps pool and Diesel failures onto [`PeakRepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::PeakRepositoryError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> PeakRepositoryError {
    debug!(error = %error, "peak store checkout failed");
    PeakRepositoryError::connection(error.message())
}

/// Classify a Diesel error as a connection or query failure.
///
/// Messages are generic; the database's own text is only logged.
pub(crate) fn map_diesel_error(error: DieselError) -> PeakRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            PeakRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            PeakRepositoryError::query("peak violates a table constraint")
        }
        DieselError::QueryBuilderError(_) => PeakRepositoryError::query("database query error"),
        _ => PeakRepositoryError::query("database error"),
    }
}
