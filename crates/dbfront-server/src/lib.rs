#![allow(clippy::must_use_candidate)]

mod boundary;
mod error;
mod extract;
mod fallback;
mod health;

use std::net::SocketAddr;

use axum::Router;
use dbfront_config::Config;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use extract::ApiJson;

/// Assembled server with the error boundary around caller-supplied routes
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build a server that only exposes the health route
    pub fn new(config: &Config) -> Self {
        Self::with_routes(config, Router::new())
    }

    /// Build a server around the given application routes
    ///
    /// Unmatched paths and methods, handler panics and every `ApiError`
    /// leave through the same error envelope.
    pub fn with_routes(config: &Config, routes: Router) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app
            .merge(routes)
            .fallback(fallback::not_found)
            .method_not_allowed_fallback(fallback::method_not_allowed);

        // Apply middleware layers (innermost first)

        // Panics become unclassified failures before the boundary sees them
        app = app.layer(CatchPanicLayer::custom(boundary::panic_response));

        let error_boundary = boundary::ErrorBoundary::new(config.errors.expose_internal_messages);
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let error_boundary = error_boundary.clone();
            async move { boundary::error_boundary(error_boundary, req, next).await }
        }));

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
