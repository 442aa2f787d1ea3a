//! Database layer - storage gateway, existence checks and repositories
//!
//! # Design Principles
//!
//! - One shared connection (pool capped at 1), so statements are serialised
//! - Every operation issues its checks and then exactly one mutating statement
//! - Unique constraints live in the schema; violations surface as conflicts

pub mod checks;
pub mod error;
pub mod repos;
pub mod schema;
pub mod storage;

pub use error::DbError;
pub use repos::*;
pub use schema::ensure_schema;
pub use storage::{Backend, Execution, Param, Storage, StorageConfig};
