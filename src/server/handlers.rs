//! HTTP handlers for the price comparison API.

use crate::pipeline::PriceComparison;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PriceComparison>,
}

/// Body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// Request errors reported to API clients as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body. Expected JSON with 'country' and 'query' fields.")]
    InvalidBody,

    #[error("Query is required and cannot be empty.")]
    EmptyQuery,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidBody | ApiError::EmptyQuery => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy", "service": "price-scout" }))
}

/// Search endpoint: discovers, scrapes and price-sorts offers for a query.
pub async fn search(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: SearchRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected search body: {}", e);
        ApiError::InvalidBody
    })?;

    let query = request.query.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::EmptyQuery);
    }

    let country =
        request.country.filter(|c| !c.is_empty()).unwrap_or_else(|| "US".to_string());

    info!("HTTP search request: query='{}', country={}", query, country);

    let products = state.pipeline.search(&query, &country).await;
    Ok((StatusCode::OK, Json(products)).into_response())
}
