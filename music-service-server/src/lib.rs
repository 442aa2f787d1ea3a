//! music-service-server: users, songs and the assignments between them
//!
//! A thin HTTP layer over a relational store. Every endpoint validates its
//! input, runs its existence checks and then issues a single statement.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ensure_schema, DbError, Storage, StorageConfig};
pub use http::{build_router, run_server, ServerConfig, ServerError};
