//! Configuration management for Pathlock server
//!
//! Sources, lowest precedence first:
//! 1. `conf/application.yml` (optional)
//! 2. the file named by `--config` (required when given)
//! 3. `PATHLOCK_*` environment variables, `__` separating key segments
//!    (e.g. `PATHLOCK_SERVER__PORT`)
//! 4. command line flags; `--port` also reads `PORT`

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};

use pathlock_common::PathlockError;

use super::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_ADDRESS, DEFAULT_SERVER_PORT,
    DEFAULT_SHUTDOWN_TIMEOUT_SECONDS, ENV_PREFIX, LOGGING_CONSOLE_PROPERTY, LOGGING_DIR_PROPERTY,
    LOGGING_FILE_PROPERTY, LOGGING_LEVEL_PROPERTY, LOGGING_ROTATION_PROPERTY,
    SERVER_ADDRESS_PROPERTY, SERVER_PORT_PROPERTY, SERVER_SHUTDOWN_TIMEOUT_PROPERTY,
    SERVER_WORKERS_PROPERTY,
};
use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Default, Parser)]
#[command(version, about = "Network-accessible advisory lock registry")]
pub struct Cli {
    /// Port to listen on
    #[arg(short = 'p', long = "port", env = "PORT")]
    pub port: Option<u16>,
    /// Address to bind
    #[arg(short = 'a', long = "address")]
    pub address: Option<String>,
    /// Additional configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

/// Application configuration loaded from config files, environment and flags
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Build the configuration from the process arguments and environment
    pub fn new() -> Result<Self, PathlockError> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(args: Cli) -> Result<Self, PathlockError> {
        Self::from_sources(args, Self::environment())
    }

    /// `PATHLOCK_*` variables, `__` separating key segments
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources(args: Cli, environment: Environment) -> Result<Self, PathlockError> {
        let mut config_builder =
            Config::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));

        if let Some(path) = args.config {
            config_builder = config_builder.add_source(File::from(path).required(true));
        }

        config_builder = config_builder.add_source(environment);

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, i64::from(v))
                .map_err(|e| PathlockError::ConfigError(e.to_string()))?;
        }
        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override(SERVER_ADDRESS_PROPERTY, v)
                .map_err(|e| PathlockError::ConfigError(e.to_string()))?;
        }

        let app_config = config_builder
            .build()
            .map_err(|e| PathlockError::ConfigError(e.to_string()))?;

        let configuration = Configuration { config: app_config };
        configuration.server_port()?;
        Ok(configuration)
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    /// Listening port; a configured value outside `0..=65535` is an error
    pub fn server_port(&self) -> Result<u16, PathlockError> {
        match self.config.get_int(SERVER_PORT_PROPERTY) {
            Ok(v) => u16::try_from(v).map_err(|_| {
                PathlockError::ConfigError(format!(
                    "{} must be between 0 and 65535, got {}",
                    SERVER_PORT_PROPERTY, v
                ))
            }),
            Err(config::ConfigError::NotFound(_)) => Ok(DEFAULT_SERVER_PORT),
            Err(e) => Err(PathlockError::ConfigError(e.to_string())),
        }
    }

    /// Number of actix workers; `None` keeps the actix default (one per core)
    pub fn server_workers(&self) -> Option<usize> {
        self.config
            .get_int(SERVER_WORKERS_PROPERTY)
            .ok()
            .and_then(|v| usize::try_from(v).ok())
            .filter(|v| *v > 0)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        let secs = self
            .config
            .get_int(SERVER_SHUTDOWN_TIMEOUT_PROPERTY)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);
        Duration::from_secs(secs)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn log_level(&self) -> String {
        self.config
            .get_string(LOGGING_LEVEL_PROPERTY)
            .unwrap_or(DEFAULT_LOG_LEVEL.to_string())
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGGING_DIR_PROPERTY).ok(),
            self.config.get_bool(LOGGING_CONSOLE_PROPERTY).unwrap_or(true),
            self.config.get_bool(LOGGING_FILE_PROPERTY).unwrap_or(false),
            self.log_level(),
            self.config
                .get_string(LOGGING_ROTATION_PROPERTY)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        )
    }
}
