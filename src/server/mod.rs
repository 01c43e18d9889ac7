//! HTTP API server.
//!
//! Exposes the price comparison pipeline as `POST /search` alongside a
//! `GET /health` probe.

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, SearchRequest};
pub use routes::create_router;

use crate::config::Config;
use crate::pipeline::PriceComparison;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Runs the HTTP server on `0.0.0.0:<port>` until the process exits.
pub async fn run(config: &Config) -> Result<()> {
    let pipeline =
        PriceComparison::from_config(config).context("Failed to set up price comparison")?;
    let app = create_router(AppState { pipeline: Arc::new(pipeline) });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.context("Failed to bind HTTP server")?;

    info!("HTTP API server listening on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}
