//! HTTP API: request models, handlers and routes

pub mod lock;
pub mod metrics;
pub mod model;
pub mod route;
