#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use errors::ErrorsConfig;
pub use health::HealthConfig;
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;

/// Top-level dbfront configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error envelope configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
