// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler-level tests for the gateway, driven through an in-memory store.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use responda_config::RespondaConfig;
use responda_core::{AffiliateRecord, Decision, InboundMessage, InstanceRecord};
use responda_engine::{DecisionEngine, EngineSettings};
use responda_gateway::{GatewayState, HealthState, handlers};
use responda_test_utils::{FixedDraws, MemoryStore};

fn gateway_state() -> GatewayState {
    let store = Arc::new(MemoryStore::new());
    store.insert_instance(InstanceRecord {
        instance_key: "inst1".to_string(),
        affiliate_id: "aff-1".to_string(),
        is_active: true,
    });
    store.insert_affiliate(AffiliateRecord {
        id: "aff-1".to_string(),
        display_name: None,
        agent_name: Some("Clara".to_string()),
        agent_style: None,
        is_active: true,
    });

    let engine = DecisionEngine::new(
        EngineSettings::from_config(&RespondaConfig::default()),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(FixedDraws::always(0.0)),
    );

    GatewayState {
        engine: Arc::new(engine),
        health: HealthState::default(),
    }
}

fn msg(message: &str) -> InboundMessage {
    InboundMessage {
        app: "whatsapp".to_string(),
        sender: "João".to_string(),
        message: message.to_string(),
        group_name: String::new(),
        phone: "5551234".to_string(),
    }
}

async fn decision_from(response: axum::response::Response) -> Decision {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_bearer_is_unauthorized() {
    let state = gateway_state();
    let response =
        handlers::post_messages(State(state), HeaderMap::new(), Json(msg("oi"))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn ingest_returns_full_decision_object() {
    let state = gateway_state();
    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Bearer inst1".parse().unwrap());

    let response =
        handlers::post_messages(State(state), headers, Json(msg("quanto custa?"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let decision = decision_from(response).await;
    assert!(decision.ok);
    assert_eq!(decision.thread_id, "private:inst1:5551234");
    assert!(decision.reply.contains("R$25"));
}

#[tokio::test]
async fn unknown_credential_still_returns_200_with_ok_false() {
    let state = gateway_state();
    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Bearer wrong".parse().unwrap());

    let response = handlers::post_messages(State(state), headers, Json(msg("oi"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let decision = decision_from(response).await;
    assert!(!decision.ok);
    assert!(!decision.reply.is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let state = gateway_state();
    let response = handlers::get_health(State(state)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
