//! Custom Axum extractors
//!
//! Rejections are `ApiError`, so bad input is answered by the response
//! encoder instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{EntityId, ValidationError};

/// Extract and validate a single `{id}` path segment
pub struct ValidId(pub EntityId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidId { field: "id" }))?;

        Ok(Self(EntityId::parse("id", &id)?))
    }
}

/// Extract and validate the `{userId}/songs/{songId}` pair
pub struct ValidIdPair {
    pub user_id: EntityId,
    pub song_id: EntityId,
}

impl<S> FromRequestParts<S> for ValidIdPair
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((user_id, song_id)): Path<(String, String)> =
            Path::from_request_parts(parts, state).await.map_err(|_| {
                ApiError::Validation(ValidationError::InvalidId { field: "userId" })
            })?;

        Ok(Self {
            user_id: EntityId::parse("userId", &user_id)?,
            song_id: EntityId::parse("songId", &song_id)?,
        })
    }
}

/// JSON body whose parse failures are 400 `Invalid JSON input.`
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::MalformedBody))?;

        // Only objects; serde would otherwise accept a positional array for a struct
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::Validation(ValidationError::MalformedBody))?;
        if !value.is_object() {
            return Err(ApiError::Validation(ValidationError::MalformedBody));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|_| ApiError::Validation(ValidationError::MalformedBody))
    }
}
