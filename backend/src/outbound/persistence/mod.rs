//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories are thin translators between Diesel row structs and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! ```no_run
//! use peak_service::outbound::persistence::{DbPool, DieselPeakRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/peaks")).await?;
//! let repo = DieselPeakRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_peak_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_peak_repository::DieselPeakRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_async,
};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
