// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Responda decision engine.

use thiserror::Error;

/// The primary error type used across all Responda store traits and core operations.
///
/// An unknown or disabled channel instance is NOT an error; it is a typed
/// decision outcome carried in the `Decision` itself. Errors here represent
/// infrastructure failures, which the orchestrator treats as non-fatal and
/// degrades around.
#[derive(Debug, Error)]
pub enum RespondaError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gateway/transport errors (bind failure, malformed request plumbing).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
