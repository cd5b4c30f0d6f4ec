// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tenant-authored reply-rule reads.

use async_trait::async_trait;

use crate::error::RespondaError;
use crate::types::ReplyRule;

/// Read the active reply rules visible to a tenant.
///
/// Rules are returned in ascending priority order: global rules
/// (`affiliate_id = None`) plus the tenant's own. The administrative
/// write side lives outside this system.
#[async_trait]
pub trait RuleStore: Send + Sync + 'static {
    /// Fetch active rules for the tenant, ordered by priority.
    async fn active_rules(&self, affiliate_id: &str) -> Result<Vec<ReplyRule>, RespondaError>;
}
