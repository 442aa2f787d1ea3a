//! Assignment endpoints - linking songs to users
//!
//! Status codes differ from the user/song endpoints for compatibility
//! with existing clients: a duplicate assignment is 404, a missing
//! assignment on removal is 409.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::put,
    Router,
};

use super::songs::song_not_found;
use super::users::user_not_found;
use crate::db::checks;
use crate::db::repos::AssignmentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidIdPair;
use crate::http::response::success;
use crate::http::server::AppState;
use crate::models::EntityId;

fn already_assigned(user_id: EntityId, song_id: EntityId) -> ApiError {
    ApiError::NotFound(format!(
        "Song {} is already assigned to user {}",
        song_id, user_id
    ))
}

fn not_assigned(user_id: EntityId, song_id: EntityId) -> ApiError {
    ApiError::Conflict(format!(
        "Song {} is not assigned to user {}",
        song_id, user_id
    ))
}

/// Both endpoints must exist; the song is checked first.
async fn require_endpoints(state: &AppState, ids: &ValidIdPair) -> Result<(), ApiError> {
    if !checks::song_exists_by_id(&state.storage, ids.song_id.get()).await? {
        return Err(song_not_found(ids.song_id));
    }
    if !checks::user_exists_by_id(&state.storage, ids.user_id.get()).await? {
        return Err(user_not_found(ids.user_id));
    }
    Ok(())
}

/// PUT /users/{userId}/songs/{songId} - assign a song to a user
async fn assign_song(
    State(state): State<Arc<AppState>>,
    ids: ValidIdPair,
) -> Result<Response, ApiError> {
    let ValidIdPair { user_id, song_id } = ids;
    require_endpoints(&state, &ids).await?;

    if checks::assignment_exists(&state.storage, user_id.get(), song_id.get()).await? {
        return Err(already_assigned(user_id, song_id));
    }

    AssignmentRepo::new(&state.storage)
        .assign(user_id, song_id)
        .await
        .map_err(|e| ApiError::unique_or(e, || already_assigned(user_id, song_id)))?;

    tracing::info!(user_id = user_id.get(), song_id = song_id.get(), "song assigned");
    Ok(success(
        StatusCode::CREATED,
        format!(
            "Song with ID: {} was successfully assigned to user with ID: {}",
            song_id, user_id
        ),
    ))
}

/// DELETE /users/{userId}/songs/{songId} - remove a song from a user
async fn unassign_song(
    State(state): State<Arc<AppState>>,
    ids: ValidIdPair,
) -> Result<Response, ApiError> {
    let ValidIdPair { user_id, song_id } = ids;
    require_endpoints(&state, &ids).await?;

    if !checks::assignment_exists(&state.storage, user_id.get(), song_id.get()).await? {
        return Err(not_assigned(user_id, song_id));
    }

    let done = AssignmentRepo::new(&state.storage)
        .unassign(user_id, song_id)
        .await?;
    if done.affected_rows == 0 {
        // Removed by a concurrent request between the check and the delete.
        return Err(not_assigned(user_id, song_id));
    }

    tracing::info!(user_id = user_id.get(), song_id = song_id.get(), "song unassigned");
    Ok(success(
        StatusCode::OK,
        format!(
            "Song with ID: {} was successfully removed from user with ID: {}",
            song_id, user_id
        ),
    ))
}

/// Assignment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{id}/songs/{song_id}",
        put(assign_song).delete(unassign_song),
    )
}
