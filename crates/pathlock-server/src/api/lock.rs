//! Lock API handlers
//!
//! Three bindings over the same registry:
//! - POST / - event-style JSON body (`LOCK` / `UNLOCK`)
//! - GET /lock/?path=..., GET /unlock/?path=... - query string
//! - GET / (HTML) and GET /locks (JSON) - listing of held keys

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::warn;

use pathlock_common::PathlockError;
use pathlock_core::{LockOperation, LockOutcome, LockRegistry};

use super::model::{LockEvent, single_path};
use crate::{
    error::AppError,
    metrics,
    model::response::{Result, ok_text},
};

/// Run one operation against the registry and render its outcome
pub fn apply(
    registry: &LockRegistry,
    operation: LockOperation,
    key: String,
) -> std::result::Result<HttpResponse, AppError> {
    match operation {
        LockOperation::Lock => {
            let outcome = registry.acquire(&key);
            metrics::record_acquire(outcome);
            match outcome {
                LockOutcome::Acquired => Ok(ok_text()),
                LockOutcome::AlreadyLocked => Err(PathlockError::AlreadyLocked(key).into()),
            }
        }
        LockOperation::Unlock => {
            let removed = registry.release(&key);
            metrics::record_release(removed);
            Ok(ok_text())
        }
    }
}

fn reject(err: PathlockError) -> AppError {
    let reason = match err {
        PathlockError::UnrecognizedOperation(_) => "unrecognized_operation",
        _ => "missing_or_malformed_input",
    };
    warn!(
        reason,
        code = err.error_code().code,
        error = %err,
        "Rejected lock request"
    );
    metrics::record_rejected(reason);
    err.into()
}

/// Event-style binding
///
/// POST /
///
/// The body is decoded as JSON regardless of its content type.
#[post("/")]
pub async fn handle_event(
    registry: web::Data<LockRegistry>,
    body: web::Bytes,
) -> std::result::Result<HttpResponse, AppError> {
    let (operation, key) = LockEvent::from_slice(&body)
        .and_then(LockEvent::into_request)
        .map_err(reject)?;
    apply(&registry, operation, key)
}

/// Acquire the lock named by the `path` query parameter
///
/// GET /lock/?path=...
#[get("/lock/")]
pub async fn lock_path(
    req: HttpRequest,
    registry: web::Data<LockRegistry>,
) -> std::result::Result<HttpResponse, AppError> {
    let key = single_path(req.query_string()).map_err(reject)?;
    apply(&registry, LockOperation::Lock, key)
}

/// Release the lock named by the `path` query parameter
///
/// GET /unlock/?path=...
#[get("/unlock/")]
pub async fn unlock_path(
    req: HttpRequest,
    registry: web::Data<LockRegistry>,
) -> std::result::Result<HttpResponse, AppError> {
    let key = single_path(req.query_string()).map_err(reject)?;
    apply(&registry, LockOperation::Unlock, key)
}

/// Render held keys as an HTML page with one unlock link per key
pub fn render_listing(keys: &[String]) -> String {
    let mut page = String::new();
    for key in keys {
        let encoded: String = url::form_urlencoded::byte_serialize(key.as_bytes()).collect();
        page.push_str(&htmlescape::encode_minimal(key));
        page.push('\n');
        page.push_str(&format!("<a href='./unlock/?path={}'>Unlock</a>\n", encoded));
        page.push_str("<br>\n");
    }
    page
}

fn sorted_held(registry: &LockRegistry) -> Vec<String> {
    let mut keys = registry.list_held();
    keys.sort();
    keys
}

/// HTML listing page
///
/// GET /
#[get("/")]
pub async fn list_page(registry: web::Data<LockRegistry>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_listing(&sorted_held(&registry)))
}

/// JSON listing
///
/// GET /locks
#[get("/locks")]
pub async fn list_locks(registry: web::Data<LockRegistry>) -> HttpResponse {
    Result::http_success(sorted_held(&registry))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use metrics_exporter_prometheus::PrometheusBuilder;

    use super::*;

    #[test]
    fn test_apply_lock_cycle() {
        let registry = LockRegistry::new();

        let resp = apply(&registry, LockOperation::Lock, "evidence/1".to_string()).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let err = apply(&registry, LockOperation::Lock, "evidence/1".to_string()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PathlockError>(),
            Some(&PathlockError::AlreadyLocked("evidence/1".to_string()))
        );

        let resp = apply(&registry, LockOperation::Unlock, "evidence/1".to_string()).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lock_metrics_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let registry = LockRegistry::new();
            apply(&registry, LockOperation::Lock, "a".to_string()).unwrap();
            apply(&registry, LockOperation::Lock, "b".to_string()).unwrap();
            apply(&registry, LockOperation::Lock, "a".to_string()).unwrap_err();
            apply(&registry, LockOperation::Unlock, "b".to_string()).unwrap();
            // Releasing an unheld key counts but leaves the gauge alone
            apply(&registry, LockOperation::Unlock, "missing".to_string()).unwrap();
            reject(PathlockError::UnrecognizedOperation("PEEK".to_string()));
            reject(PathlockError::missing_parameter("path"));
        });

        let rendered = handle.render();
        assert!(rendered.contains("lock_acquire_total{outcome=\"acquired\"} 2"));
        assert!(rendered.contains("lock_acquire_total{outcome=\"already_locked\"} 1"));
        assert!(rendered.contains("lock_release_total 2"));
        assert!(rendered.contains("locks_held 1"));
        assert!(
            rendered.contains("lock_rejected_requests_total{reason=\"unrecognized_operation\"} 1")
        );
        assert!(rendered
            .contains("lock_rejected_requests_total{reason=\"missing_or_malformed_input\"} 1"));
    }

    #[test]
    fn test_render_listing() {
        let page = render_listing(&["a b".to_string(), "<x>&'".to_string()]);
        assert_eq!(
            page,
            "a b\n<a href='./unlock/?path=a+b'>Unlock</a>\n<br>\n\
             &lt;x&gt;&amp;&#x27;\n<a href='./unlock/?path=%3Cx%3E%26%27'>Unlock</a>\n<br>\n"
        );
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_listing(&[]), "");
    }
}
