//! Route definitions for the price comparison API.

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Creates the API router with CORS and request tracing.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", post(handlers::search))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
