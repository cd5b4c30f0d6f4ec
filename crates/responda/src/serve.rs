// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `responda serve` command implementation.
//!
//! Wires the loaded configuration into the SQLite store, builds the
//! decision engine, and starts the webhook gateway.

use std::sync::Arc;

use tracing::info;

use responda_config::RespondaConfig;
use responda_core::RespondaError;
use responda_engine::{DecisionEngine, EngineSettings, ThreadRngSource};
use responda_gateway::{GatewayState, HealthState, ServerConfig, start_server};
use responda_storage::{Database, SqliteStore};

/// Runs the `responda serve` command.
pub async fn run_serve(config: RespondaConfig) -> Result<(), RespondaError> {
    init_tracing(&config.agent.log_level);

    info!("starting responda serve");

    let db = Arc::new(Database::from_config(&config.storage).await?);
    let store = SqliteStore::new(db.clone());
    info!(path = %config.storage.database_path, "storage ready");

    let store = Arc::new(store);
    let engine = DecisionEngine::new(
        EngineSettings::from_config(&config),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(ThreadRngSource),
    );

    let state = GatewayState {
        engine: Arc::new(engine),
        health: HealthState::default(),
    };
    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    let result = start_server(&server_config, state).await;
    db.close().await?;
    result
}

/// Initialize the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("responda={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
