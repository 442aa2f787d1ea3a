//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is present but empty
    Empty { field: &'static str },

    /// Field is absent or null
    Missing { field: &'static str },

    /// Path id is not an integer >= 1
    InvalidId { field: &'static str },

    /// Body is not a JSON object of the expected shape
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "Invalid JSON input: {} cannot be empty", field),
            Self::Missing { field } => write!(f, "Invalid JSON input: {} is required", field),
            Self::InvalidId { field } => {
                write!(f, "Invalid ID input: {} must be a positive integer", field)
            }
            Self::MalformedBody => write!(f, "Invalid JSON input."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-empty string field.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(v) if v.is_empty() => Err(ValidationError::Empty { field }),
        Some(v) => Ok(v),
    }
}
