// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{Router, routing::get};

use super::{
    analytics::analytics_summary,
    handlers::health_handler,
    projects::{create_project, get_project, list_projects},
    tasks::{create_task, get_task, list_tasks},
    users::{create_user, get_user, list_users},
};
use crate::state::AppState;

/// Entity and analytics routes. Nested under /api by `create_router`.
pub fn http_router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Users
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))

        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", get(get_project))

        // Tasks
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task))

        // Analytics
        .route("/analytics/summary", get(analytics_summary))
}
