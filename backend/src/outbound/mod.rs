//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL repository using Diesel.
//! - **memory**: process-local repository for running without a database.

pub mod memory;
pub mod persistence;
