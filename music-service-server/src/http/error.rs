//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": message}` responses with the status
//! code chosen by the operation that raised them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body, missing field or bad path id (400)
    Validation(ValidationError),

    /// Referenced entity is absent (404)
    NotFound(String),

    /// Uniqueness would be violated (409)
    Conflict(String),

    /// A list query returned no rows (204)
    Empty(String),

    /// Driver or connection failure (500, logged)
    Storage(DbError),
}

impl ApiError {
    /// Map a failed mutation: unique violations become `on_unique`, anything
    /// else is a storage failure.
    pub fn unique_or(e: DbError, on_unique: impl FnOnce() -> ApiError) -> Self {
        if e.is_unique_violation() {
            on_unique()
        } else {
            Self::Storage(e)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Empty(_) => StatusCode::NO_CONTENT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound(msg) | Self::Conflict(msg) | Self::Empty(msg) => msg,
            Self::Storage(e) => {
                tracing::error!("Database error: {}", e);
                e.to_string()
            }
        };

        response::error(status, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Storage(e)
    }
}
