//! Domain primitives, services and ports.
//!
//! Purpose: define the peak record, the value objects used to create, change
//! and search for peaks, and the service that drives the record store. Types
//! are transport agnostic; adapters map them to HTTP and SQL.
//!
//! Public surface:
//! - Error (alias to `error::Error`): error payload with a stable code.
//! - Peak / PeakDraft / PeakPatch: the record and its create/update inputs.
//! - BoundingBox / PageRequest: search and listing parameters.
//! - PeakService: implementation of the `PeakCommand`/`PeakQuery` ports.

pub mod bounding_box;
pub mod coordinates;
pub mod error;
pub mod page;
pub mod peak;
pub mod peak_service;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::bounding_box::BoundingBox;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::page::PageRequest;
pub use self::peak::{Peak, PeakDraft, PeakId, PeakPatch};
pub use self::peak_service::{PEAK_NOT_FOUND, PeakService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldViolation, ValidationErrors};

