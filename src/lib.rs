//! hotels - an HTTP service exposing the hotel listing.
//!
//! `GET /hotels` answers with the fixed listing body; `GET /health` is a
//! liveness probe. Everything else is routed (or rejected) by axum.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
