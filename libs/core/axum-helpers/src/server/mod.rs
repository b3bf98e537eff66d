//! Server infrastructure module.
//!
//! Provides TCP bind + serve with graceful shutdown on SIGTERM/SIGINT.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::create_app;
//! use core_config::server::ServerConfig;
//!
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::create_app;
pub use shutdown::shutdown_signal;
