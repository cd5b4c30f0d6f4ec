// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template candidate reads and atomic learning-counter writes.

use async_trait::async_trait;

use crate::error::RespondaError;
use crate::types::{Intent, TemplateRecord};

/// Read candidates and apply learning signals to reply templates.
///
/// The three write operations are named, additive increments keyed by
/// template id. They must never be implemented as read-modify-write of
/// the whole row: concurrent decisions referencing the same template rely
/// on the increments composing.
#[async_trait]
pub trait TemplateStore: Send + Sync + 'static {
    /// Fetch enabled candidates for `(intent, style)`, bounded by `limit`.
    async fn candidates(
        &self,
        intent: Intent,
        style: &str,
        limit: usize,
    ) -> Result<Vec<TemplateRecord>, RespondaError>;

    /// Record that a template was served (`uses += 1`).
    async fn record_use(&self, template_id: &str) -> Result<(), RespondaError>;

    /// Record an engagement signal (`uses += 1`, `score += score_delta`).
    async fn record_engagement(
        &self,
        template_id: &str,
        score_delta: i64,
    ) -> Result<(), RespondaError>;

    /// Record a win signal (`wins += 1`, `score += score_delta`).
    async fn record_win(&self, template_id: &str, score_delta: i64)
        -> Result<(), RespondaError>;
}
