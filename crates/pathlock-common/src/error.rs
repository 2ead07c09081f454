//! Error types and error codes for Pathlock
//!
//! This module defines:
//! - `PathlockError`: Request-level error enum
//! - `ErrorCode`: Structured error codes for API responses

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Request-level error types. None of these is fatal to the process.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathlockError {
    /// The key is already held by an earlier acquisition.
    #[error("resource already locked")]
    AlreadyLocked(String),

    #[error("{0}")]
    MissingOrMalformedInput(String),

    #[error("event type not known: {0}")]
    UnrecognizedOperation(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl PathlockError {
    pub fn missing_parameter(name: &str) -> Self {
        PathlockError::MissingOrMalformedInput(format!("missing required parameter '{}'", name))
    }

    pub fn repeated_parameter(name: &str) -> Self {
        PathlockError::MissingOrMalformedInput(format!(
            "parameter '{}' must be given exactly once",
            name
        ))
    }

    pub fn undecodable_body(cause: impl Display) -> Self {
        PathlockError::MissingOrMalformedInput(format!("error decoding request: {}", cause))
    }

    /// Error code reported for this error in structured responses.
    pub fn error_code(&self) -> ErrorCode<'static> {
        match self {
            PathlockError::AlreadyLocked(_) => RESOURCE_LOCKED,
            PathlockError::MissingOrMalformedInput(_) => PARAMETER_VALIDATE_ERROR,
            PathlockError::UnrecognizedOperation(_) => OPERATION_NOT_SUPPORTED,
            PathlockError::ConfigError(_) => CONFIG_ERROR,
        }
    }
}

/// Error code structure for API responses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub message: &'a str,
}

pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const OPERATION_NOT_SUPPORTED: ErrorCode<'static> = ErrorCode {
    code: 20003,
    message: "operation not supported",
};

pub const RESOURCE_LOCKED: ErrorCode<'static> = ErrorCode {
    code: 20005,
    message: "resource locked",
};

pub const CONFIG_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30001,
    message: "configuration error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PathlockError::AlreadyLocked("a".to_string()).to_string(),
            "resource already locked"
        );
        assert_eq!(
            PathlockError::UnrecognizedOperation("PEEK".to_string()).to_string(),
            "event type not known: PEEK"
        );
        assert_eq!(
            PathlockError::missing_parameter("path").to_string(),
            "missing required parameter 'path'"
        );
        assert_eq!(
            PathlockError::repeated_parameter("path").to_string(),
            "parameter 'path' must be given exactly once"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PathlockError::AlreadyLocked(String::new()).error_code(),
            RESOURCE_LOCKED
        );
        assert_eq!(
            PathlockError::undecodable_body("eof").error_code(),
            PARAMETER_VALIDATE_ERROR
        );
        assert_eq!(
            PathlockError::UnrecognizedOperation(String::new()).error_code(),
            OPERATION_NOT_SUPPORTED
        );
    }
}
