//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP serving through an `axum_server` handle
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
