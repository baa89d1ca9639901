use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use dbfront_translate::{Failure, UnreadableBody};
use http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::ApiError;

/// JSON body extractor that rejects with the error envelope
///
/// Unlike `axum::Json`, mapping failures keep the path of the offending
/// value so the caller is told which field or element was wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(Failure::UnsupportedMediaType(
                "Expected request with `Content-Type: application/json`".to_owned(),
            )
            .into());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| Failure::bad_request(rejection.body_text()))?;

        Ok(Self(parse_body(&bytes)?))
    }
}

/// Deserialize a JSON body, tracking the path to any mapping failure
pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, UnreadableBody> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
