// src/api/http/users.rs
// User list, lookup and create handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::models::{CreateUserRequest, User};
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.read().await.users.all())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let store = state.read().await;
    let user = store.users.get(&id)?;
    Ok(Json(user.clone()))
}

/// Create a user. A body without `id` gets a fresh one; a taken `id` is
/// rejected and the store is left as it was.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = payload.into_user();
    state.write().await.users.insert(user.clone())?;

    info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}
