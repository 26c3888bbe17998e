// src/api/mod.rs
// HTTP facade: routing, handlers and error mapping

pub mod error;
pub mod http;

pub use error::{ApiError, ApiResult};

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::TrackerConfig;
use crate::state::AppState;

/// Create the full application router
pub fn create_router(state: AppState, config: &TrackerConfig) -> Router {
    Router::new()
        // Health check and welcome at root level
        .route("/health", get(http::health_handler))
        .route("/", get(http::index_handler))

        // API routes
        .nest("/api", http::http_router())

        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin.trim()) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!(origin, "Invalid CORS origin, allowing any");
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
