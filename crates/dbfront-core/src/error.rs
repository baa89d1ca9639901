use http::StatusCode;

use crate::ErrorResponse;

/// Trait for errors that can be rendered as the external error envelope
///
/// Implemented by the failure taxonomy. The server layer converts these
/// into actual HTTP responses, keeping the mapping policy decoupled from
/// axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Structured error code, `0` when none is available
    fn error_code(&self) -> i32 {
        0
    }

    /// Message safe to expose to API consumers
    fn client_message(&self) -> Option<String>;

    /// Build a fresh envelope for this error
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.client_message())
    }
}
