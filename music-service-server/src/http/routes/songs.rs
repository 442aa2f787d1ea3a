//! Song endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{delete, get},
    Router,
};
use serde_json::json;

use crate::db::checks;
use crate::db::repos::SongRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::response::{respond, success};
use crate::http::server::AppState;
use crate::models::{CreateSongRequest, EntityId, NewSong};

fn song_exists(song: &NewSong) -> ApiError {
    ApiError::Conflict(format!(
        "Song already exists: {} - {}",
        song.name(),
        song.genre()
    ))
}

pub(crate) fn song_not_found(id: EntityId) -> ApiError {
    ApiError::NotFound(format!("Song does not exist: ID {}", id))
}

/// POST /songs - create a song
async fn create_song(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateSongRequest>,
) -> Result<Response, ApiError> {
    let song = NewSong::new(req)?;
    if checks::song_exists_by_name_genre(&state.storage, song.name(), song.genre()).await? {
        return Err(song_exists(&song));
    }

    let id = SongRepo::new(&state.storage)
        .create(&song)
        .await
        .map_err(|e| ApiError::unique_or(e, || song_exists(&song)))?;

    tracing::info!(song_id = id, "song created");
    Ok(success(
        StatusCode::CREATED,
        format!("Song successfully created with ID: {}", id),
    ))
}

/// GET /songs - all songs
async fn list_songs(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let songs = SongRepo::new(&state.storage).list().await?;
    if songs.is_empty() {
        return Err(ApiError::Empty("No songs found.".into()));
    }

    tracing::debug!(count = songs.len(), "songs listed");
    Ok(respond(StatusCode::OK, &json!({ "songs": songs })))
}

/// DELETE /songs/{id} - remove a song and its assignments
async fn delete_song(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Response, ApiError> {
    if !checks::song_exists_by_id(&state.storage, id.get()).await? {
        return Err(song_not_found(id));
    }

    SongRepo::new(&state.storage).delete(id).await?;

    tracing::info!(song_id = id.get(), "song deleted");
    Ok(success(
        StatusCode::OK,
        format!("Song with ID '{}' successfully deleted", id),
    ))
}

/// Song routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/songs", get(list_songs).post(create_song))
        .route("/songs/{id}", delete(delete_song))
}
