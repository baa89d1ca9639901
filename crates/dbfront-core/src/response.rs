use serde::{Deserialize, Serialize};

/// External error envelope returned to API callers
///
/// Serialized as `{"errorCode": <int>, "errorMessage": <string|null>}`.
/// Every failure gets its own value; nothing here is shared between
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Vendor code, or `0` when no structured code is available
    pub error_code: i32,
    /// Human-readable message, absent when the failure carried none
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// Create an envelope with the given code and message
    pub const fn new(error_code: i32, error_message: Option<String>) -> Self {
        Self {
            error_code,
            error_message,
        }
    }
}
