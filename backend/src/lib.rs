//! Mountain peak record service.
//!
//! Hexagonal layout: `domain` holds the peak types, ports and service;
//! `inbound` adapts HTTP requests onto the driving ports; `outbound` provides
//! the PostgreSQL and in-memory record stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
