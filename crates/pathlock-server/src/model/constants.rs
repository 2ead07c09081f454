//! Server-specific constants
//!
//! Property keys and defaults used by [`super::config::Configuration`].

/// Configuration file loaded when present
pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "pathlock";

pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const SERVER_WORKERS_PROPERTY: &str = "server.workers";
pub const SERVER_SHUTDOWN_TIMEOUT_PROPERTY: &str = "server.shutdown_timeout_seconds";

pub const LOGGING_LEVEL_PROPERTY: &str = "logging.level";
pub const LOGGING_DIR_PROPERTY: &str = "logging.dir";
pub const LOGGING_CONSOLE_PROPERTY: &str = "logging.console";
pub const LOGGING_FILE_PROPERTY: &str = "logging.file";
pub const LOGGING_ROTATION_PROPERTY: &str = "logging.rotation";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 80;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";
