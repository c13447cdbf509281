//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use peak_service::Trace;
use peak_service::doc::ApiDoc;
use peak_service::inbound::http::{configure, state::HttpState};

fn build_app(
    http_state: web::Data<HttpState>,
    docs_enabled: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    app.configure(move |cfg| {
        if docs_enabled {
            cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }
    })
}

/// Construct an Actix HTTP server from `config`.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
        docs_enabled,
    } = config;

    let server = HttpServer::new(move || build_app(http_state.clone(), docs_enabled))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, docs_enabled, "peak service listening");
    Ok(server)
}
