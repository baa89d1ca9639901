use dbfront_core::HttpError;
use http::StatusCode;
use thiserror::Error;

use crate::json::UnreadableBody;
use crate::vendor::{ClientError, SqlError, StatementError};

/// Flavour of an internal failure that still carries a usable message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalKind {
    /// Text could not be encoded or decoded
    Encoding,
    /// Data that did not come from the request failed to parse
    Parse,
    /// Any other internal condition
    General,
}

/// Taxonomy category of a failure, used for logs and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Unclassified,
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    UnsupportedMediaType,
    MethodNotAllowed,
    UnreadableBody,
    Internal,
    Sql,
    Client,
    Statement,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::UnreadableBody => "unreadable_body",
            Self::Internal => "internal",
            Self::Sql => "sql",
            Self::Client => "client",
            Self::Statement => "statement",
        }
    }
}

/// Every failure that can reach the API boundary
///
/// Each variant is one taxonomy category, so a value always maps to
/// exactly one status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Request body could not be read as the expected JSON
    #[error(transparent)]
    UnreadableBody(#[from] UnreadableBody),

    /// Database client failure raised while executing a statement
    #[error(transparent)]
    Statement(#[from] StatementError),

    /// General database client failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// SQL layer failure with a vendor code
    #[error(transparent)]
    Sql(#[from] SqlError),

    /// Caller is not authenticated
    #[error("{0}")]
    Unauthorized(String),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with the current resource state
    #[error("{0}")]
    Conflict(String),

    /// Malformed argument, cast failure or unusable request
    #[error("{0}")]
    BadRequest(String),

    /// Request content type is not accepted
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Route exists but not for this method
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Internal failure whose message is still meaningful to callers
    #[error("{message}")]
    Internal { kind: InternalKind, message: String },

    /// Anything else
    #[error("{}", .message.as_deref().unwrap_or_default())]
    Unclassified { message: Option<String> },
}

impl Failure {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(kind: InternalKind, message: impl Into<String>) -> Self {
        Self::Internal {
            kind,
            message: message.into(),
        }
    }

    /// Fallback failure; an empty message is treated as absent
    pub fn unclassified(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Unclassified {
            message: (!message.is_empty()).then_some(message),
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::UnreadableBody(_) => Category::UnreadableBody,
            Self::Statement(_) => Category::Statement,
            Self::Client(_) => Category::Client,
            Self::Sql(_) => Category::Sql,
            Self::Unauthorized(_) => Category::Unauthorized,
            Self::NotFound(_) => Category::NotFound,
            Self::Conflict(_) => Category::Conflict,
            Self::BadRequest(_) => Category::BadRequest,
            Self::UnsupportedMediaType(_) => Category::UnsupportedMediaType,
            Self::MethodNotAllowed(_) => Category::MethodNotAllowed,
            Self::Internal { .. } => Category::Internal,
            Self::Unclassified { .. } => Category::Unclassified,
        }
    }
}

impl HttpError for Failure {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Statement(e) => e.status_code(),
            Self::Client(e) => e.status_code(),
            Self::UnreadableBody(_) | Self::Sql(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } | Self::Unclassified { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> i32 {
        match self {
            Self::Statement(e) => e.code,
            Self::Client(e) => e.code,
            Self::Sql(e) => e.vendor_code,
            _ => 0,
        }
    }

    fn client_message(&self) -> Option<String> {
        match self {
            Self::UnreadableBody(body) => Some(body.client_message()),
            Self::Unclassified { message } => message.clone(),
            other => Some(other.to_string()),
        }
    }
}
