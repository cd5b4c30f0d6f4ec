// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! The ingest route consumes the already-normalized message shape as
//! strict JSON; there is no content-type sniffing or form tolerance here.
//! The Bearer token is the opaque instance credential, validated by the
//! engine itself during instance resolution.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use responda_core::{Decision, InboundMessage};

use crate::server::GatewayState;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Extract the Bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("authorization")?.to_str().ok()?.trim();
    let token = raw.strip_prefix("Bearer ").or_else(|| raw.strip_prefix("bearer "))?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// POST /v1/messages
///
/// Runs one decision for the inbound message and returns the full
/// decision object. The engine never fails a request outright: missing
/// credentials are the only 401, everything else is a 200 with `ok`
/// reflecting instance resolution.
pub async fn post_messages(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(msg): Json<InboundMessage>,
) -> Response {
    let Some(instance_key) = bearer_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "missing instance credential".to_string(),
            }),
        )
            .into_response();
    };

    let request_id = uuid::Uuid::new_v4().to_string();
    let decision: Decision = state.engine.decide(&instance_key, &msg).await;
    tracing::debug!(
        request_id = %request_id,
        ok = decision.ok,
        intent = %decision.intent,
        stage = %decision.stage,
        thread_id = %decision.thread_id,
        "decision served"
    );
    (StatusCode::OK, Json(decision)).into_response()
}

/// GET /health (unauthenticated, for process supervisors).
pub async fn get_health(State(state): State<GatewayState>) -> Response {
    let body = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_extraction_handles_case_and_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer inst1".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("inst1".to_string()));

        headers.insert("authorization", "bearer  inst2 ".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("inst2".to_string()));

        headers.insert("authorization", "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert("authorization", "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
