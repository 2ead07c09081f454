//! HTTP server setup module.

use std::time::Duration;

use actix_web::{App, HttpServer, dev::Server, web};
use metrics_exporter_prometheus::PrometheusHandle;

use pathlock_common::PathlockError;
use pathlock_core::LockRegistry;

use crate::{api::route::routes, middleware::TracingMiddleware, model::Configuration};

/// Socket and worker settings for the main server
#[derive(Debug, Clone)]
pub struct HttpServerOptions {
    pub address: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub shutdown_timeout: Duration,
}

impl HttpServerOptions {
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, PathlockError> {
        Ok(Self {
            address: configuration.server_address(),
            port: configuration.server_port()?,
            workers: configuration.server_workers(),
            shutdown_timeout: configuration.shutdown_timeout(),
        })
    }
}

/// Creates and binds the main HTTP server.
///
/// Every worker shares the one registry; signal handling is left to the
/// caller so shutdown goes through [`super::spawn_shutdown_listener`].
pub fn main_server(
    registry: web::Data<LockRegistry>,
    prometheus: Option<PrometheusHandle>,
    options: &HttpServerOptions,
) -> Result<Server, std::io::Error> {
    let prometheus = prometheus.map(web::Data::new);

    let mut server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(TracingMiddleware)
            .app_data(registry.clone());
        if let Some(handle) = prometheus.clone() {
            app = app.app_data(handle);
        }
        app.configure(routes)
    })
    .disable_signals()
    .shutdown_timeout(options.shutdown_timeout.as_secs());

    if let Some(workers) = options.workers {
        server = server.workers(workers);
    }

    Ok(server
        .bind((options.address.as_str(), options.port))?
        .run())
}
