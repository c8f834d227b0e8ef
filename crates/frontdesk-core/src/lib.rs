//! # Frontdesk Core
//!
//! Shared types for the frontdesk web backend.
//!
//! This crate provides the foundational pieces used by the server and CLI:
//! - Common error types
//! - The transform API request/response structures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod error;

pub use api::{transform, TransformRequest, TransformResponse, GREETING_PREFIX};
pub use error::{Error, Result};
