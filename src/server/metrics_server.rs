// src/server/metrics_server.rs

use crate::core::metrics::{self, gather_metrics};
use crate::core::state::ServerState;
use anyhow::{Context, Result};
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// Handles HTTP requests to the /metrics endpoint.
async fn metrics_handler(state: Arc<ServerState>) -> impl IntoResponse {
    metrics::CONNECTED_CLIENTS.set(state.clients.len() as f64);

    let body = gather_metrics();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
}

/// Runs a simple HTTP server to expose Prometheus metrics on /metrics.
pub async fn run_metrics_server(
    state: Arc<ServerState>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()> {
    let host = state.config.host.clone();
    let port = state.config.metrics.port;

    let app = Router::new().route("/metrics", get(move || metrics_handler(state.clone())));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind metrics server on {host}:{port}"))?;
    info!(
        "Prometheus metrics server listening on http://{}/metrics",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.recv().await.ok();
            info!("Metrics server shutting down.");
        })
        .await
        .context("Metrics server failed")
}
