// src/api/http/analytics.rs
// Analytics summary handler

use axum::{Json, extract::State};

use crate::analytics::summarize;
use crate::models::AnalyticsSummary;
use crate::state::AppState;

pub async fn analytics_summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    let today = state.today();
    let store = state.read().await;
    Json(summarize(&store, today))
}
