//! # Frontdesk Server
//!
//! HTTP server exposing the transform API and serving the pre-built
//! frontend as static assets.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod server;

pub use assets::FrontendAssets;
pub use server::{Server, ServerConfig};
