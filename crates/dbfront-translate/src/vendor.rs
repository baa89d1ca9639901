//! Errors raised by the database client library and their status tables

use http::StatusCode;
use thiserror::Error;

/// Client codes treated as authentication failures
const CLIENT_UNAUTHORIZED: [i32; 2] = [10005, 10053];

/// Client codes caused by the caller's input
const CLIENT_BAD_REQUEST: [i32; 12] = [
    0, 1007, 1008, 60081, 145_001, 145_007, 145_024, 150_010, 150_012, 150_020, 151_001, 151_002,
];

/// Statement codes treated as authentication failures
const STATEMENT_UNAUTHORIZED: [i32; 4] = [10005, 10053, 10100, 10102];

/// General failure raised by the database client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientError {
    /// Vendor error code
    pub code: i32,
    /// Vendor error message
    pub message: String,
}

impl ClientError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Status bucket for this client code
    ///
    /// Codes outside both curated sets are server errors.
    pub fn status_code(&self) -> StatusCode {
        if CLIENT_UNAUTHORIZED.contains(&self.code) {
            StatusCode::UNAUTHORIZED
        } else if CLIENT_BAD_REQUEST.contains(&self.code) {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Failure raised by the database client while executing a statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StatementError {
    /// Vendor error code
    pub code: i32,
    /// Vendor error message
    pub message: String,
}

impl StatementError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Status bucket for this statement code
    ///
    /// Unlike [`ClientError`], every code outside the auth set is a client
    /// error.
    pub fn status_code(&self) -> StatusCode {
        if STATEMENT_UNAUTHORIZED.contains(&self.code) {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

/// Failure reported by the SQL layer with the vendor's own code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SqlError {
    /// Vendor error code, passed through verbatim
    pub vendor_code: i32,
    /// Vendor error message
    pub message: String,
}

impl SqlError {
    pub fn new(vendor_code: i32, message: impl Into<String>) -> Self {
        Self {
            vendor_code,
            message: message.into(),
        }
    }
}
