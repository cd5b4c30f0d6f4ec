// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only decision event log.

use async_trait::async_trait;

use crate::error::RespondaError;
use crate::types::EventRecord;

/// Append one audit record per decision.
///
/// Events are write-once and unkeyed; duplicates from replays are
/// acceptable audit noise, not a correctness violation.
#[async_trait]
pub trait EventStore: Send + Sync + 'static {
    /// Append an event row.
    async fn append(&self, event: &EventRecord) -> Result<(), RespondaError>;
}
