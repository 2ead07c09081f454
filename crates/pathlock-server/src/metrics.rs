// Metrics module for observability
// Provides counters and a gauge for lock traffic

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use pathlock_core::LockOutcome;

pub const LOCK_ACQUIRE_TOTAL: &str = "lock_acquire_total";
pub const LOCK_RELEASE_TOTAL: &str = "lock_release_total";
pub const LOCK_REJECTED_REQUESTS_TOTAL: &str = "lock_rejected_requests_total";
pub const LOCKS_HELD: &str = "locks_held";

/// Initialize all metric descriptions
/// Should be called once at application startup
pub fn init_metrics() {
    describe_counter!(
        LOCK_ACQUIRE_TOTAL,
        "Total number of acquire requests, by outcome"
    );
    describe_counter!(LOCK_RELEASE_TOTAL, "Total number of release requests");
    describe_counter!(
        LOCK_REJECTED_REQUESTS_TOTAL,
        "Total number of requests rejected before reaching the registry"
    );
    describe_gauge!(LOCKS_HELD, "Current number of held locks");
    gauge!(LOCKS_HELD).set(0.0);
}

/// Install the Prometheus recorder backing `GET /metrics`
pub fn install_prometheus_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))
}

/// Count an acquire; the held gauge moves only when a key was inserted
pub fn record_acquire(outcome: LockOutcome) {
    counter!(LOCK_ACQUIRE_TOTAL, "outcome" => outcome.as_str()).increment(1);
    if outcome.is_acquired() {
        gauge!(LOCKS_HELD).increment(1.0);
    }
}

/// Count a release; the held gauge moves only when a held key was removed
pub fn record_release(removed: bool) {
    counter!(LOCK_RELEASE_TOTAL).increment(1);
    if removed {
        gauge!(LOCKS_HELD).decrement(1.0);
    }
}

pub fn record_rejected(reason: &'static str) {
    counter!(LOCK_REJECTED_REQUESTS_TOTAL, "reason" => reason).increment(1);
}
