//! Route handlers organized by resource

pub mod assignments;
pub mod health;
pub mod songs;
pub mod users;
