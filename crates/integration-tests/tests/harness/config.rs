//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use dbfront_config::{Config, ErrorsConfig, HealthConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                errors: ErrorsConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Replace server error messages with a generic one
    pub fn hide_internal_messages(mut self) -> Self {
        self.config.errors.expose_internal_messages = false;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
