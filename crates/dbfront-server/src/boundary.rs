use std::any::Any;

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dbfront_core::ErrorResponse;
use dbfront_telemetry::Counter;
use dbfront_translate::Failure;

use crate::ApiError;
use crate::error::TranslatedFailure;

/// Message sent with server errors when internal messages are hidden
const GENERIC_MESSAGE: &str = "internal server error";

/// Shared state for the error boundary middleware
#[derive(Clone)]
pub struct ErrorBoundary {
    expose_internal_messages: bool,
    counter: Counter<u64>,
}

impl ErrorBoundary {
    pub fn new(expose_internal_messages: bool) -> Self {
        Self {
            expose_internal_messages,
            counter: dbfront_telemetry::metrics::error_counter(),
        }
    }
}

/// Log, count and optionally redact every translated failure
///
/// Responses that did not come from an [`ApiError`] pass through untouched.
pub async fn error_boundary(boundary: ErrorBoundary, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let Some(translated) = response.extensions_mut().remove::<TranslatedFailure>() else {
        return response;
    };

    let status = response.status();
    let category = translated.category.as_str();

    if status.is_server_error() {
        tracing::warn!(
            %method,
            path = %path,
            status = status.as_u16(),
            error_code = translated.error_code,
            category,
            error = %translated.detail,
            "request failed"
        );
    } else {
        tracing::debug!(
            %method,
            path = %path,
            status = status.as_u16(),
            error_code = translated.error_code,
            category,
            error = %translated.detail,
            "request rejected"
        );
    }

    dbfront_telemetry::metrics::record_error(&boundary.counter, status.as_u16(), category);

    if status.is_server_error() && !boundary.expose_internal_messages {
        let body = ErrorResponse::new(translated.error_code, Some(GENERIC_MESSAGE.to_owned()));
        return (status, Json(body)).into_response();
    }

    response
}

/// Render a handler panic as an unclassified failure
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_default();

    tracing::error!(panic = %message, "handler panicked");

    ApiError(Failure::unclassified(message)).into_response()
}
