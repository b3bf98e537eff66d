//! Shared Axum plumbing for HTTP APIs.
//!
//! This crate provides the pieces every API binary needs:
//! - [`AppError`] / [`ErrorResponse`]: domain errors mapped to HTTP responses
//! - [`not_found`]: plain-text 404 fallback handler
//! - [`server::create_app`]: TCP bind + serve with graceful shutdown

pub mod errors;
pub mod server;

pub use errors::handlers::not_found;
pub use errors::{AppError, ErrorResponse};
