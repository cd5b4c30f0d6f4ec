// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the webhook boundary.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use responda_core::RespondaError;
use responda_engine::DecisionEngine;

use crate::handlers;

/// Health state for the unauthenticated health endpoint.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The decision engine serving every ingest call.
    pub engine: Arc<DecisionEngine>,
    /// Health state for unauthenticated endpoints.
    pub health: HealthState,
}

/// Gateway server configuration (mirrors GatewayConfig from responda-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router (exposed for tests).
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/messages", post(handlers::post_messages))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves:
/// - POST /v1/messages (Bearer instance credential)
/// - GET /health (unauthenticated)
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), RespondaError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RespondaError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| RespondaError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
