//! Prometheus scrape endpoint

use actix_web::{HttpResponse, get, web};
use metrics_exporter_prometheus::PrometheusHandle;

/// GET /metrics
///
/// Empty body when no recorder was installed.
#[get("/metrics")]
pub async fn prometheus_metrics(handle: Option<web::Data<PrometheusHandle>>) -> HttpResponse {
    let body = handle.map(|h| h.render()).unwrap_or_default();
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body)
}
