//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`PeakCommand`], [`PeakQuery`]) are what inbound adapters
//! call; the driven port ([`PeakRepository`]) is what persistence adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod peak_command;
mod peak_query;
mod peak_repository;

#[cfg(test)]
pub use peak_command::MockPeakCommand;
pub use peak_command::PeakCommand;
#[cfg(test)]
pub use peak_query::MockPeakQuery;
pub use peak_query::PeakQuery;
#[cfg(test)]
pub use peak_repository::MockPeakRepository;
pub use peak_repository::{PeakRepository, PeakRepositoryError};
