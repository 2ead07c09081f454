//! Application startup utilities module.

mod http;
mod logging;
mod shutdown;

pub use http::{HttpServerOptions, main_server};
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{ShutdownReason, spawn_shutdown_listener, wait_for_shutdown_signal};
