use dbfront_translate::Failure;
use http::{Method, Uri};

use crate::ApiError;

/// Fallback for paths with no route
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError(Failure::not_found(format!("No handler found for {method} {}", uri.path())))
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError(Failure::MethodNotAllowed(format!(
        "Request method '{method}' is not supported"
    )))
}
