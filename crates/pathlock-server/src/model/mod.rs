//! Data models module
//!
//! # Module Structure
//!
//! - `constants` - Property keys and defaults
//! - `config` - Configuration management
//! - `response` - HTTP response types

pub mod config;
pub mod constants;
pub mod response;

// Re-export commonly used types at the module level
pub use config::{Cli, Configuration};
pub use constants::*;
pub use response::Result;
