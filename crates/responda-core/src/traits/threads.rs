// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread conversation state persistence.

use async_trait::async_trait;

use crate::error::RespondaError;
use crate::types::{ThreadId, ThreadState};

/// Fetch and upsert per-thread conversation state.
///
/// The upsert is keyed on the deterministic thread id, so replaying the
/// same logical turn updates the existing row instead of creating a
/// duplicate. Last-writer-wins under concurrent upserts is acceptable.
#[async_trait]
pub trait ThreadStore: Send + Sync + 'static {
    /// Fetch the current state of a thread, if it has one.
    async fn fetch(&self, thread_id: &ThreadId) -> Result<Option<ThreadState>, RespondaError>;

    /// Insert or update the thread row keyed on `state.thread_id`.
    async fn upsert(&self, state: &ThreadState) -> Result<(), RespondaError>;
}
