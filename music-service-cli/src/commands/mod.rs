//! Command implementations for the music-service binary

pub mod serve;

pub use serve::run_serve;
