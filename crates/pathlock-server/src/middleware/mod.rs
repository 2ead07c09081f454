pub mod tracing;

pub use self::tracing::TracingMiddleware;
