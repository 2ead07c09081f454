//! Pathlock Core - In-memory advisory lock registry
//!
//! This crate holds the only stateful piece of Pathlock:
//! - `LockRegistry`: the set of held keys behind a single mutex
//! - `LockOutcome` / `LockOperation`: the boundary types adapters map to and from

pub mod model;
pub mod service;

pub use model::{LockOperation, LockOutcome};
pub use service::lock::LockRegistry;
