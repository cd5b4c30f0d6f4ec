// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store trait implementations backed by the SQLite database.
//!
//! `SqliteStore` is a thin, cloneable handle delegating to the typed
//! query modules; one value implements every store trait the engine
//! consumes.

use std::sync::Arc;

use async_trait::async_trait;

use responda_core::{
    AffiliateRecord, DirectoryStore, EventRecord, EventStore, InstanceRecord, Intent, ReplyRule,
    RespondaError, RuleStore, TemplateRecord, TemplateStore, ThreadId, ThreadState, ThreadStore,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed implementation of the Responda store traits.
#[derive(Clone)]
pub struct SqliteStore {
    db: Arc<Database>,
}

impl SqliteStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DirectoryStore for SqliteStore {
    async fn instance(&self, instance_key: &str) -> Result<Option<InstanceRecord>, RespondaError> {
        queries::instances::get_instance(&self.db, instance_key).await
    }

    async fn affiliate(&self, id: &str) -> Result<Option<AffiliateRecord>, RespondaError> {
        queries::affiliates::get_affiliate(&self.db, id).await
    }
}

#[async_trait]
impl TemplateStore for SqliteStore {
    async fn candidates(
        &self,
        intent: Intent,
        style: &str,
        limit: usize,
    ) -> Result<Vec<TemplateRecord>, RespondaError> {
        queries::templates::candidates(&self.db, intent, style, limit).await
    }

    async fn record_use(&self, template_id: &str) -> Result<(), RespondaError> {
        queries::templates::record_use(&self.db, template_id).await
    }

    async fn record_engagement(
        &self,
        template_id: &str,
        score_delta: i64,
    ) -> Result<(), RespondaError> {
        queries::templates::record_engagement(&self.db, template_id, score_delta).await
    }

    async fn record_win(&self, template_id: &str, score_delta: i64) -> Result<(), RespondaError> {
        queries::templates::record_win(&self.db, template_id, score_delta).await
    }
}

#[async_trait]
impl ThreadStore for SqliteStore {
    async fn fetch(&self, thread_id: &ThreadId) -> Result<Option<ThreadState>, RespondaError> {
        queries::threads::get_thread(&self.db, thread_id).await
    }

    async fn upsert(&self, state: &ThreadState) -> Result<(), RespondaError> {
        queries::threads::upsert_thread(&self.db, state).await
    }
}

#[async_trait]
impl EventStore for SqliteStore {
    async fn append(&self, event: &EventRecord) -> Result<(), RespondaError> {
        queries::events::insert_event(&self.db, event).await
    }
}

#[async_trait]
impl RuleStore for SqliteStore {
    async fn active_rules(&self, affiliate_id: &str) -> Result<Vec<ReplyRule>, RespondaError> {
        queries::rules::active_rules(&self.db, affiliate_id).await
    }
}
