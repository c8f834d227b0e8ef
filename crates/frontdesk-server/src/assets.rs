//! Frontend asset mounting.
//!
//! At startup the server checks once whether the frontend build output is
//! present and complete. The outcome is fixed for the process lifetime: a
//! build directory that appears later is not picked up without a restart.

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Default build-output location, relative to the repository root.
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

/// Body returned for every non-API path while the frontend build is absent.
pub const FRONTEND_UNAVAILABLE_BODY: &str = "Frontend not built. Run the frontend build step.";

/// Outcome of the startup check for the frontend build directory.
#[derive(Debug, Clone)]
pub enum FrontendAssets {
    /// The build directory exists and contains an `index.html`.
    Ready {
        /// Directory the static files are served from.
        dist_dir: PathBuf,
    },
    /// Build output missing or incomplete; every request receives a fixed
    /// 503 response.
    Unavailable,
}

impl FrontendAssets {
    /// Checks the given build directory and records the outcome.
    ///
    /// The directory qualifies when it exists and directly contains an
    /// `index.html`. A missing or incomplete directory is an expected,
    /// handled condition: it is logged as a single warning and mapped to
    /// [`FrontendAssets::Unavailable`], never an error.
    pub fn discover(dist_dir: impl Into<PathBuf>) -> Self {
        let dist_dir = dist_dir.into();

        if dist_dir.is_dir() && dist_dir.join("index.html").is_file() {
            tracing::info!(path = %dist_dir.display(), "Serving frontend assets");
            Self::Ready { dist_dir }
        } else {
            tracing::warn!(
                path = %dist_dir.display(),
                "Frontend build directory not found or incomplete; serving a placeholder response"
            );
            Self::Unavailable
        }
    }

    /// Returns `true` if the frontend build output was found.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Returns the directory static files are served from, if any.
    pub fn dist_dir(&self) -> Option<&Path> {
        match self {
            Self::Ready { dist_dir } => Some(dist_dir),
            Self::Unavailable => None,
        }
    }

    /// Builds the router handling every path not claimed by the API.
    ///
    /// Ready: files are served verbatim by request path, and any path that
    /// does not map to an existing file receives `index.html` so client-side
    /// routing keeps working. `ServeDir` normalizes request paths and
    /// confines reads to the build directory.
    ///
    /// Unavailable: every path and method receives the fixed 503 response.
    pub fn router(&self) -> Router {
        match self {
            Self::Ready { dist_dir } => {
                let spa_fallback = ServeFile::new(dist_dir.join("index.html"));
                Router::new().fallback_service(ServeDir::new(dist_dir).fallback(spa_fallback))
            }
            Self::Unavailable => Router::new().fallback(frontend_unavailable),
        }
    }
}

/// Resolves the build directory against the repository root.
///
/// The anchor is this crate's manifest directory walked up to the workspace
/// root, mirroring the repository layout (`crates/frontdesk-server` →
/// repository root → `frontend/dist`). An absolute override replaces the
/// anchor entirely; a relative override is joined onto it.
pub fn resolve_dist_dir(dist_dir: Option<&Path>) -> PathBuf {
    let anchor = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    anchor.join(dist_dir.unwrap_or_else(|| Path::new(DEFAULT_DIST_DIR)))
}

async fn frontend_unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, FRONTEND_UNAVAILABLE_BODY)
}
