//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON responses for every outcome, errors included

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
