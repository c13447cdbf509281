//! HTTP inbound adapter exposing the peak REST endpoints.

pub mod error;
pub mod peaks;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON body handler and every peak route.
///
/// The caller supplies `web::Data<HttpState>` on the enclosing `App`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use peak_service::inbound::http::{configure, state::HttpState};
/// use peak_service::outbound::memory::InMemoryPeakRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryPeakRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(peaks::search_peaks)
        .service(peaks::create_peak)
        .service(peaks::list_peaks)
        .service(peaks::get_peak)
        .service(peaks::update_peak)
        .service(peaks::delete_peak);
}
