// src/api/http/tasks.rs
// Task handlers, including status/priority filtering

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::models::{CreateTaskRequest, Task, TaskFilter};
use crate::state::AppState;

/// List tasks, optionally narrowed by `?status=` and `?priority=`.
/// Unknown values are rejected by the query extractor; blank ones are ignored.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> Json<Vec<Task>> {
    let tasks = state.read().await.filter_tasks(&filter);
    debug!(?filter, count = tasks.len(), "Listed tasks");
    Json(tasks)
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    let store = state.read().await;
    Ok(Json(store.tasks.get(&id)?.clone()))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = payload.into_task();
    state.write().await.tasks.insert(task.clone())?;

    info!(
        task_id = %task.id,
        project_id = %task.project_id,
        status = %task.status,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}
