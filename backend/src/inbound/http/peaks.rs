//! Peak HTTP handlers.
//!
//! ```text
//! POST   /peaks/
//! GET    /peaks/?skip=&limit=
//! GET    /peaks/{peak_id}
//! PUT    /peaks/{peak_id}
//! DELETE /peaks/{peak_id}
//! POST   /peaks/search/
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BoundingBox, PageRequest, Peak, PeakDraft, PeakPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_u32, parse_peak_id};

/// Peak fields submitted on create and update.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PeakRequestBody {
    /// Peak name; an empty name on update keeps the stored one.
    #[schema(example = "Mount Everest")]
    pub name: String,
    /// Latitude in decimal degrees.
    #[schema(example = 27.9881, minimum = -90.0, maximum = 90.0)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[schema(example = 86.925, minimum = -180.0, maximum = 180.0)]
    pub longitude: f64,
    /// Altitude in metres.
    #[schema(example = 8848.0)]
    pub altitude: f64,
}

/// A stored peak as returned to clients.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PeakResponseBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Peak name.
    #[schema(example = "Mount Everest")]
    pub name: String,
    /// Latitude in decimal degrees.
    #[schema(example = 27.9881)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[schema(example = 86.925)]
    pub longitude: f64,
    /// Altitude in metres.
    #[schema(example = 8848.0)]
    pub altitude: f64,
}

impl From<Peak> for PeakResponseBody {
    fn from(peak: Peak) -> Self {
        Self {
            id: peak.id().get(),
            latitude: peak.latitude(),
            longitude: peak.longitude(),
            altitude: peak.altitude(),
            name: peak.name().to_owned(),
        }
    }
}

/// Bounding box submitted to the search endpoint; all bounds are inclusive.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BoundingBoxBody {
    /// Southern edge.
    #[schema(example = 28.0, minimum = -90.0, maximum = 90.0)]
    pub min_lat: f64,
    /// Northern edge.
    #[schema(example = 29.0, minimum = -90.0, maximum = 90.0)]
    pub max_lat: f64,
    /// Western edge.
    #[schema(example = 86.0, minimum = -180.0, maximum = 180.0)]
    pub min_lon: f64,
    /// Eastern edge.
    #[schema(example = 87.0, minimum = -180.0, maximum = 180.0)]
    pub max_lon: f64,
}

/// Pagination parameters for the listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPeaksQuery {
    /// Records to skip, default 0.
    #[param(value_type = Option<u32>)]
    pub skip: Option<String>,
    /// Records to return, default 100.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

/// Path parameters identifying one peak.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PeakPath {
    /// Peak identifier.
    #[param(value_type = i32)]
    pub peak_id: String,
}

fn peak_id(path: web::Path<PeakPath>) -> ApiResult<crate::domain::PeakId> {
    parse_peak_id(&path.into_inner().peak_id, FieldName::new("peak_id"))
}

fn into_bodies(peaks: Vec<Peak>) -> Vec<PeakResponseBody> {
    peaks.into_iter().map(PeakResponseBody::from).collect()
}

/// Store a new peak.
#[utoipa::path(
    post,
    path = "/peaks/",
    request_body = PeakRequestBody,
    responses(
        (status = 200, description = "Peak stored", body = PeakResponseBody),
        (status = 422, description = "Validation error", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "createPeak"
)]
#[post("/peaks/")]
pub async fn create_peak(
    state: web::Data<HttpState>,
    payload: web::Json<PeakRequestBody>,
) -> ApiResult<web::Json<PeakResponseBody>> {
    let body = payload.into_inner();
    let draft = PeakDraft::new(body.name, body.latitude, body.longitude, body.altitude)?;
    let peak = state.peaks.create_peak(draft).await?;
    Ok(web::Json(peak.into()))
}

/// List peaks by ascending identifier.
#[utoipa::path(
    get,
    path = "/peaks/",
    params(ListPeaksQuery),
    responses(
        (status = 200, description = "Page of peaks", body = [PeakResponseBody]),
        (status = 422, description = "Invalid pagination", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "listPeaks"
)]
#[get("/peaks/")]
pub async fn list_peaks(
    state: web::Data<HttpState>,
    query: web::Query<ListPeaksQuery>,
) -> ApiResult<web::Json<Vec<PeakResponseBody>>> {
    let query = query.into_inner();
    let page = PageRequest::new(
        parse_optional_u32(query.skip, FieldName::new("skip"))?,
        parse_optional_u32(query.limit, FieldName::new("limit"))?,
    );
    let peaks = state.peaks_query.list_peaks(page).await?;
    Ok(web::Json(into_bodies(peaks)))
}

/// Fetch one peak.
#[utoipa::path(
    get,
    path = "/peaks/{peak_id}",
    params(PeakPath),
    responses(
        (status = 200, description = "Peak", body = PeakResponseBody),
        (status = 404, description = "Peak not found", body = ErrorSchema),
        (status = 422, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "getPeak"
)]
#[get("/peaks/{peak_id}")]
pub async fn get_peak(
    state: web::Data<HttpState>,
    path: web::Path<PeakPath>,
) -> ApiResult<web::Json<PeakResponseBody>> {
    let id = peak_id(path)?;
    let peak = state.peaks_query.get_peak(id).await?;
    Ok(web::Json(peak.into()))
}

/// Update a peak.
///
/// The body is validated as a whole record, then fields holding an empty
/// string or zero are ignored and keep their stored values.
#[utoipa::path(
    put,
    path = "/peaks/{peak_id}",
    params(PeakPath),
    request_body = PeakRequestBody,
    responses(
        (status = 200, description = "Updated peak", body = PeakResponseBody),
        (status = 404, description = "Peak not found", body = ErrorSchema),
        (status = 422, description = "Validation error", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "updatePeak"
)]
#[put("/peaks/{peak_id}")]
pub async fn update_peak(
    state: web::Data<HttpState>,
    path: web::Path<PeakPath>,
    payload: web::Json<PeakRequestBody>,
) -> ApiResult<web::Json<PeakResponseBody>> {
    let id = peak_id(path)?;
    let body = payload.into_inner();
    let patch = PeakPatch::from_submitted(body.name, body.latitude, body.longitude, body.altitude)?;
    let peak = state.peaks.update_peak(id, patch).await?;
    Ok(web::Json(peak.into()))
}

/// Delete a peak, returning the removed record.
#[utoipa::path(
    delete,
    path = "/peaks/{peak_id}",
    params(PeakPath),
    responses(
        (status = 200, description = "Deleted peak", body = PeakResponseBody),
        (status = 404, description = "Peak not found", body = ErrorSchema),
        (status = 422, description = "Invalid identifier", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "deletePeak"
)]
#[delete("/peaks/{peak_id}")]
pub async fn delete_peak(
    state: web::Data<HttpState>,
    path: web::Path<PeakPath>,
) -> ApiResult<web::Json<PeakResponseBody>> {
    let id = peak_id(path)?;
    let peak = state.peaks.delete_peak(id).await?;
    Ok(web::Json(peak.into()))
}

/// Find every peak inside a bounding box.
#[utoipa::path(
    post,
    path = "/peaks/search/",
    request_body = BoundingBoxBody,
    responses(
        (status = 200, description = "Peaks inside the box", body = [PeakResponseBody]),
        (status = 422, description = "Validation error", body = ErrorSchema)
    ),
    tags = ["peaks"],
    operation_id = "searchPeaks"
)]
#[post("/peaks/search/")]
pub async fn search_peaks(
    state: web::Data<HttpState>,
    payload: web::Json<BoundingBoxBody>,
) -> ApiResult<web::Json<Vec<PeakResponseBody>>> {
    let body = payload.into_inner();
    let bbox = BoundingBox::new(body.min_lat, body.max_lat, body.min_lon, body.max_lon)?;
    let peaks = state.peaks_query.search_peaks(bbox).await?;
    Ok(web::Json(into_bodies(peaks)))
}

#[cfg(test)]
#[path = "peaks_tests.rs"]
mod tests;
