//! HTTP server implementation.
//!
//! Exposes the transform API endpoint and mounts the pre-built frontend,
//! falling back to a fixed unavailable response when the build output is
//! missing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use frontdesk_core::api::{transform, TransformRequest, TransformResponse};
use frontdesk_core::{Error, Result};

use crate::assets::{self, FrontendAssets};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
    /// Frontend build directory override (absolute, or relative to the
    /// repository root). `None` uses the default location.
    pub dist_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
            dist_dir: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
    dist_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Sets the frontend build directory.
    pub fn dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = Some(dist_dir.into());
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(|| "0.0.0.0:8080".parse().unwrap()),
            cors: self.cors.unwrap_or(true),
            dist_dir: self.dist_dir,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Outcome of the startup frontend-assets check. Written once here,
    /// read-only afterwards.
    pub assets: FrontendAssets,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with the given assets decision.
    pub fn new(assets: FrontendAssets) -> Self {
        Self {
            assets,
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    ///
    /// The frontend build directory is resolved and checked here, exactly
    /// once; the outcome does not change for the process lifetime.
    pub fn new(config: ServerConfig) -> Self {
        let dist_dir = assets::resolve_dist_dir(config.dist_dir.as_deref());
        let state = Arc::new(AppState::new(FrontendAssets::discover(dist_dir)));
        Self { config, state }
    }

    /// Creates the router.
    fn router(&self) -> Router {
        let mut router = Router::new()
            // Health endpoints
            .route("/health", get(health))
            .route("/ready", get(ready))
            .route("/api/status", get(server_status))
            // Transform API
            .route("/api/transform", post(transform_text))
            .with_state(self.state.clone())
            // Everything else goes to the frontend (static files or the
            // fixed unavailable response).
            .fallback_service(self.state.assets.router());

        // Add middleware
        router = router.layer(TraceLayer::new_for_http());

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot start.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting frontdesk server");
        eprintln!(
            "\n\x1b[32m✓\x1b[0m Server listening on http://{}",
            self.config.addr
        );
        eprintln!("  Press Ctrl+C to stop\n");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(Error::Io)?;

        // Set up graceful shutdown
        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(Error::Io)?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

// === Error Response ===

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                error_type: error_type.into(),
            },
        }
    }
}

fn error_response(status: StatusCode, message: &str, error_type: &str) -> Response {
    let body = Json(ErrorResponse::new(message, error_type));
    (status, body).into_response()
}

// === Health Endpoints ===

async fn health() -> &'static str {
    "OK"
}

async fn ready(State(state): State<Arc<AppState>>) -> Response {
    if state.assets.is_ready() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "No frontend assets").into_response()
    }
}

#[derive(Debug, Serialize)]
struct ServerStatus {
    status: String,
    uptime_seconds: u64,
    frontend_ready: bool,
    dist_dir: Option<String>,
}

async fn server_status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    Json(ServerStatus {
        status: "running".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        frontend_ready: state.assets.is_ready(),
        dist_dir: state.assets.dist_dir().map(|p| p.display().to_string()),
    })
}

// === Transform API ===

async fn transform_text(
    payload: std::result::Result<Json<TransformRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        // Present-but-wrong payloads (missing `text`, non-string `text`) are
        // validation failures; the rejection message names the field.
        Err(JsonRejection::JsonDataError(rejection)) => {
            let err = Error::validation(rejection.body_text());
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &err.to_string(),
                "validation_error",
            );
        },
        // Unparseable bodies and wrong content types keep the framework's
        // client-error status.
        Err(rejection) => {
            return error_response(
                rejection.status(),
                &rejection.body_text(),
                "invalid_request_error",
            );
        },
    };

    Json(TransformResponse {
        result: transform(&request.text),
    })
    .into_response()
}
