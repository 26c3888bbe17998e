// src/api/http/handlers.rs
// Health and welcome handlers

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timeUtc": Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the TaskTracker API"
    }))
}
