//! Route configuration
//!
//! Routes:
//! - POST / - Lock or unlock from a JSON event
//! - GET /lock/?path= - Acquire a lock
//! - GET /unlock/?path= - Release a lock
//! - GET / - HTML listing of held locks
//! - GET /locks - JSON listing of held locks
//! - GET /metrics - Prometheus metrics

use actix_web::web;

use super::{lock, metrics};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(lock::handle_event)
        .service(lock::lock_path)
        .service(lock::unlock_path)
        .service(lock::list_page)
        .service(lock::list_locks)
        .service(metrics::prometheus_metrics);
}
