//! User endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use serde_json::json;

use crate::db::checks;
use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::response::{respond, success};
use crate::http::server::AppState;
use crate::models::{CreateUserRequest, EntityId, NewUser};

fn user_exists(name: &str) -> ApiError {
    ApiError::Conflict(format!("User already exists: {}", name))
}

pub(crate) fn user_not_found(id: EntityId) -> ApiError {
    ApiError::NotFound(format!("User with ID {} does not exist", id))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let user = NewUser::new(req)?;
    if checks::user_exists_by_name(&state.storage, user.name()).await? {
        return Err(user_exists(user.name()));
    }

    let id = UserRepo::new(&state.storage)
        .create(&user)
        .await
        .map_err(|e| ApiError::unique_or(e, || user_exists(user.name())))?;

    tracing::info!(user_id = id, "user created");
    Ok(success(
        StatusCode::CREATED,
        format!("User successfully created with ID: {}", id),
    ))
}

/// GET /users - all users with their assigned songs
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let users = UserRepo::new(&state.storage).list_with_songs().await?;
    if users.is_empty() {
        return Err(ApiError::Empty("No users found.".into()));
    }

    tracing::debug!(count = users.len(), "users listed");
    Ok(respond(StatusCode::OK, &json!({ "users": users })))
}

/// GET /users/{id} - one user with assigned songs
async fn get_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Response, ApiError> {
    if !checks::user_exists_by_id(&state.storage, id.get()).await? {
        return Err(user_not_found(id));
    }

    let user = UserRepo::new(&state.storage)
        .get_with_songs(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    tracing::debug!(user_id = id.get(), songs = user.songs.len(), "user fetched");
    Ok(respond(StatusCode::OK, &user))
}

/// DELETE /users/{id} - remove a user and its assignments
async fn delete_user(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Response, ApiError> {
    if !checks::user_exists_by_id(&state.storage, id.get()).await? {
        return Err(user_not_found(id));
    }

    UserRepo::new(&state.storage).delete(id).await?;

    tracing::info!(user_id = id.get(), "user deleted");
    Ok(success(
        StatusCode::OK,
        format!("User with ID {} successfully deleted", id),
    ))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
}
