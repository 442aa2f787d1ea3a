//! Repository implementations for database access
//!
//! Each repository issues exactly one statement per call and leaves
//! precondition checks to `db::checks`.

pub mod assignments;
pub mod songs;
pub mod users;

pub use assignments::AssignmentRepo;
pub use songs::{SongListing, SongRepo};
pub use users::{SongRef, UserDetail, UserListing, UserRepo};
