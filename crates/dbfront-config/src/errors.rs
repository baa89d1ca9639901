use serde::Deserialize;

/// How translated failures are exposed to callers
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Send the failure's own message with 500 responses
    ///
    /// When disabled, server errors carry a generic message. Status and
    /// error code are never changed.
    #[serde(default = "default_expose")]
    pub expose_internal_messages: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            expose_internal_messages: default_expose(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_expose() -> bool {
    true
}
