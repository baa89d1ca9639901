use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use dbfront_translate::{Category, ClientError, Failure, SqlError, StatementError, UnreadableBody};

/// Handler error that renders as the external error envelope
///
/// Handlers return `Result<_, ApiError>` and use `?` on any vendor error,
/// `Failure`, or `anyhow::Error`.
#[derive(Debug)]
pub struct ApiError(pub Failure);

/// Details of a translated failure, attached to the response for the
/// error boundary to log and count
#[derive(Debug, Clone)]
pub(crate) struct TranslatedFailure {
    pub category: Category,
    pub error_code: i32,
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = dbfront_translate::translate(&self.0);

        let translated = TranslatedFailure {
            category: self.0.category(),
            error_code: body.error_code,
            detail: self.0.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(translated);
        response
    }
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self(Failure::from(error))
    }
}

impl From<UnreadableBody> for ApiError {
    fn from(body: UnreadableBody) -> Self {
        Self(body.into())
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        Self(error.into())
    }
}

impl From<StatementError> for ApiError {
    fn from(error: StatementError) -> Self {
        Self(error.into())
    }
}

impl From<SqlError> for ApiError {
    fn from(error: SqlError) -> Self {
        Self(error.into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(Failure::bad_request(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(Failure::bad_request(rejection.body_text()))
    }
}
