// src/api/http/projects.rs
// Project handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::models::{CreateProjectRequest, Project};
use crate::state::AppState;

pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.read().await.projects.all())
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let store = state.read().await;
    Ok(Json(store.projects.get(&id)?.clone()))
}

/// `owner_id` is stored as given, without checking the user exists
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let project = payload.into_project();
    state.write().await.projects.insert(project.clone())?;

    info!(project_id = %project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}
