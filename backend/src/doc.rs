//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every peak endpoint and the schema wrappers from the
//! HTTP adapter. Swagger UI serves it at `/docs` and the `openapi-dump`
//! binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::peaks::{BoundingBoxBody, PeakRequestBody, PeakResponseBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mountain Peak Service",
        description = "an API for storing and retrieving mountain peaks information",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::peaks::create_peak,
        crate::inbound::http::peaks::list_peaks,
        crate::inbound::http::peaks::get_peak,
        crate::inbound::http::peaks::update_peak,
        crate::inbound::http::peaks::delete_peak,
        crate::inbound::http::peaks::search_peaks,
    ),
    components(schemas(
        PeakRequestBody,
        PeakResponseBody,
        BoundingBoxBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "peaks", description = "Operations with mountain peaks")
    )
)]
pub struct ApiDoc;
