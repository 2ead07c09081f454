//! Main entry point for the Pathlock server.
//!
//! Builds the one lock registry for this process and serves it over HTTP
//! until a shutdown signal arrives.

use actix_web::web;
use pathlock_server::{
    LockRegistry, metrics,
    model::Configuration,
    startup::{self, HttpServerOptions},
};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new()?;
    let _logging_guard = startup::init_logging(&configuration.logging_config())?;

    // Initialize metrics for observability
    let prometheus = match metrics::install_prometheus_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("{}. Continuing without /metrics output.", e);
            None
        }
    };
    metrics::init_metrics();

    // State lives only in memory and is lost on restart
    let registry = web::Data::new(LockRegistry::new());

    let options = HttpServerOptions::from_configuration(&configuration)?;
    info!(
        "Starting Pathlock server on {}:{}",
        options.address, options.port
    );

    let server = startup::main_server(registry, prometheus, &options)?;
    startup::spawn_shutdown_listener(server.handle());
    server.await?;

    info!("Pathlock server stopped");
    Ok(())
}
