//! HTTP response types for Pathlock server
//!
//! Plain-text bodies for the lock endpoints and a JSON result wrapper for
//! structured listings.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::error::SUCCESS;

/// Body returned for a successful acquire or release
pub const OK_BODY: &str = "ok";

/// Generic result wrapper for API responses
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Result<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> Result<T> {
    pub fn success(data: T) -> Result<T> {
        Result::<T> {
            code: SUCCESS.code,
            message: SUCCESS.message.to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse
    where
        T: Serialize,
    {
        HttpResponse::Ok().json(Result::success(data))
    }
}

/// `200 OK` with the plain `ok` body
pub fn ok_text() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(OK_BODY)
}
