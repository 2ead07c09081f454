// Main library module for Pathlock - a network-accessible advisory lock registry
// The binary in main.rs wires these modules together

pub mod api; // HTTP handlers, request models and routes
pub mod error; // actix-web error mapping
pub mod metrics; // Metrics and observability
pub mod middleware; // HTTP middleware
pub mod model; // Configuration and response types
pub mod startup; // Application startup utilities

pub use pathlock_core::{LockOperation, LockOutcome, LockRegistry};
