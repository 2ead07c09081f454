//! Pathlock Common - Shared error types and error codes
//!
//! This crate provides the foundational types used across all Pathlock components:
//! - Error types and error codes
//! - Common constants

pub mod error;

// Re-exports for convenience
pub use error::{ErrorCode, PathlockError};

/// Query parameter carrying the resource key
pub const PATH: &str = "path";

/// Event type for an acquire request
pub const EVENT_TYPE_LOCK: &str = "LOCK";

/// Event type for a release request
pub const EVENT_TYPE_UNLOCK: &str = "UNLOCK";
