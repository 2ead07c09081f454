//! Request tracing middleware.
//!
//! Opens one `http_request` span per request carrying method, path, peer
//! address and any propagated trace id, then logs the response status.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderMap,
};
use tracing::{Instrument, Span, info, info_span};

pub mod headers {
    /// Traceparent header (W3C Trace Context)
    pub const TRACEPARENT: &str = "traceparent";
    /// Request ID header (custom)
    pub const X_REQUEST_ID: &str = "x-request-id";
}

/// Trace context extracted from incoming request headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContext {
    pub traceparent: Option<String>,
    pub request_id: Option<String>,
}

impl TraceContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        Self {
            traceparent: get(headers::TRACEPARENT),
            request_id: get(headers::X_REQUEST_ID),
        }
    }

    /// Trace ID from `traceparent`, else the request ID
    pub fn trace_id(&self) -> Option<&str> {
        // traceparent: 00-<trace-id>-<span-id>-<flags>
        if let Some(trace_id) = self
            .traceparent
            .as_deref()
            .and_then(|tp| tp.split('-').nth(1))
        {
            return Some(trace_id);
        }
        self.request_id.as_deref()
    }
}

/// Tracing middleware factory
#[derive(Default)]
pub struct TracingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TracingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TracingMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingMiddlewareService { service }))
    }
}

pub struct TracingMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_ctx = TraceContext::from_headers(req.headers());
        let trace_id = trace_ctx.trace_id().unwrap_or("none").to_string();
        let peer_ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        let span = info_span!(
            "http_request",
            trace_id = %trace_id,
            http.method = %req.method(),
            http.target = %req.path(),
            net.peer.ip = %peer_ip,
            http.status_code = tracing::field::Empty,
        );

        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let res = fut.await?;

                let status = res.status().as_u16();
                Span::current().record("http.status_code", status);
                info!(
                    status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "request completed"
                );

                Ok(res)
            }
            .instrument(span),
        )
    }
}
