// Error handling for the Pathlock HTTP layer
// Re-exports from pathlock_common with actix-web specific implementations

use std::fmt::{Display, Formatter};

use actix_web::{HttpResponse, http::StatusCode};

pub use pathlock_common::error::{ErrorCode, PathlockError, SUCCESS};

// Local wrapper for application errors to implement actix-web error handling
// (Cannot impl foreign trait for foreign type due to orphan rules)
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<PathlockError> for AppError {
    fn from(value: PathlockError) -> Self {
        AppError {
            inner: anyhow::Error::new(value),
        }
    }
}

impl AppError {
    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.downcast_ref::<PathlockError>() {
            Some(PathlockError::AlreadyLocked(_)) => StatusCode::LOCKED,
            Some(PathlockError::MissingOrMalformedInput(_))
            | Some(PathlockError::UnrecognizedOperation(_)) => StatusCode::BAD_REQUEST,
            Some(PathlockError::ConfigError(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Plain-text bodies, newline terminated, as the lock endpoints have always answered
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("{}\n", self.inner))
    }
}
