// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only directory of channel instances and tenants.

use async_trait::async_trait;

use crate::error::RespondaError;
use crate::types::{AffiliateRecord, InstanceRecord};

/// Lookup of channel-instance credentials and tenant records.
///
/// Both operations are pure reads; the engine treats tenant data as
/// immutable for the duration of one decision.
#[async_trait]
pub trait DirectoryStore: Send + Sync + 'static {
    /// Look up a channel instance by its opaque credential.
    ///
    /// Returns `None` when no record exists; an existing-but-inactive
    /// record is returned as-is so the caller can distinguish the cases.
    async fn instance(&self, instance_key: &str) -> Result<Option<InstanceRecord>, RespondaError>;

    /// Look up a tenant record by id.
    async fn affiliate(&self, id: &str) -> Result<Option<AffiliateRecord>, RespondaError>;
}
