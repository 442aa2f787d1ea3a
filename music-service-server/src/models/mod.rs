//! Request models with validation at construction
//!
//! All client input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod id;
pub mod song;
pub mod user;
pub mod validation;

pub use id::EntityId;
pub use song::{CreateSongRequest, NewSong};
pub use user::{CreateUserRequest, NewUser};
pub use validation::ValidationError;
