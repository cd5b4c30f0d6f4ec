// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store implementing every Responda store trait.
//!
//! Backs engine tests with injectable fixtures, captured writes, and
//! per-store failure toggles for exercising the degrade paths.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use responda_core::{
    AffiliateRecord, DirectoryStore, EventRecord, EventStore, InstanceRecord, Intent,
    ReplyRule, RespondaError, RuleStore, TemplateRecord, TemplateStore, ThreadId, ThreadState,
    ThreadStore,
};

/// A template row with its selection scope, as the real store keeps it.
#[derive(Debug, Clone)]
struct StoredTemplate {
    record: TemplateRecord,
    intent: Intent,
    style: String,
    enabled: bool,
}

/// In-memory store for deterministic tests.
///
/// Set the `fail_*` toggles to make a store family return errors, to
/// assert the engine degrades instead of failing the decision.
#[derive(Default)]
pub struct MemoryStore {
    instances: Mutex<HashMap<String, InstanceRecord>>,
    affiliates: Mutex<HashMap<String, AffiliateRecord>>,
    templates: Mutex<Vec<StoredTemplate>>,
    threads: Mutex<HashMap<String, ThreadState>>,
    events: Mutex<Vec<EventRecord>>,
    rules: Mutex<Vec<ReplyRule>>,

    pub fail_directory: AtomicBool,
    pub fail_templates: AtomicBool,
    pub fail_threads: AtomicBool,
    pub fail_events: AtomicBool,
    pub fail_rules: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, toggle: &AtomicBool, what: &str) -> Result<(), RespondaError> {
        if toggle.load(Ordering::Relaxed) {
            Err(RespondaError::Storage {
                source: Box::new(std::io::Error::other(format!("{what} unavailable"))),
            })
        } else {
            Ok(())
        }
    }

    pub fn insert_instance(&self, record: InstanceRecord) {
        self.instances
            .lock()
            .unwrap()
            .insert(record.instance_key.clone(), record);
    }

    pub fn insert_affiliate(&self, record: AffiliateRecord) {
        self.affiliates
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
    }

    pub fn insert_template(
        &self,
        intent: Intent,
        style: &str,
        enabled: bool,
        record: TemplateRecord,
    ) {
        self.templates.lock().unwrap().push(StoredTemplate {
            record,
            intent,
            style: style.to_string(),
            enabled,
        });
    }

    pub fn insert_rule(&self, rule: ReplyRule) {
        let mut rules = self.rules.lock().unwrap();
        rules.push(rule);
        rules.sort_by_key(|r| r.priority);
    }

    /// Snapshot of a template's counters, for learning assertions.
    pub fn template(&self, template_id: &str) -> Option<TemplateRecord> {
        self.templates
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.record.id == template_id)
            .map(|t| t.record.clone())
    }

    /// Snapshot of a thread row, for persistence assertions.
    pub fn thread(&self, thread_id: &str) -> Option<ThreadState> {
        self.threads.lock().unwrap().get(thread_id).cloned()
    }

    /// Number of thread rows (idempotence assertions).
    pub fn thread_count(&self) -> usize {
        self.threads.lock().unwrap().len()
    }

    /// All appended events, in order.
    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().unwrap().clone()
    }

    /// Seed a thread row directly, for prior-state fixtures.
    pub fn seed_thread(&self, state: ThreadState) {
        self.threads
            .lock()
            .unwrap()
            .insert(state.thread_id.0.clone(), state);
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn instance(&self, instance_key: &str) -> Result<Option<InstanceRecord>, RespondaError> {
        self.check(&self.fail_directory, "directory")?;
        Ok(self.instances.lock().unwrap().get(instance_key).cloned())
    }

    async fn affiliate(&self, id: &str) -> Result<Option<AffiliateRecord>, RespondaError> {
        self.check(&self.fail_directory, "directory")?;
        Ok(self.affiliates.lock().unwrap().get(id).cloned())
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn candidates(
        &self,
        intent: Intent,
        style: &str,
        limit: usize,
    ) -> Result<Vec<TemplateRecord>, RespondaError> {
        self.check(&self.fail_templates, "templates")?;
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.enabled && t.intent == intent && t.style == style)
            .take(limit)
            .map(|t| t.record.clone())
            .collect())
    }

    async fn record_use(&self, template_id: &str) -> Result<(), RespondaError> {
        self.check(&self.fail_templates, "templates")?;
        if let Some(t) = self
            .templates
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.record.id == template_id)
        {
            t.record.uses += 1;
        }
        Ok(())
    }

    async fn record_engagement(
        &self,
        template_id: &str,
        score_delta: i64,
    ) -> Result<(), RespondaError> {
        self.check(&self.fail_templates, "templates")?;
        if let Some(t) = self
            .templates
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.record.id == template_id)
        {
            t.record.uses += 1;
            t.record.score += score_delta;
        }
        Ok(())
    }

    async fn record_win(&self, template_id: &str, score_delta: i64) -> Result<(), RespondaError> {
        self.check(&self.fail_templates, "templates")?;
        if let Some(t) = self
            .templates
            .lock()
            .unwrap()
            .iter_mut()
            .find(|t| t.record.id == template_id)
        {
            t.record.wins += 1;
            t.record.score += score_delta;
        }
        Ok(())
    }
}

#[async_trait]
impl ThreadStore for MemoryStore {
    async fn fetch(&self, thread_id: &ThreadId) -> Result<Option<ThreadState>, RespondaError> {
        self.check(&self.fail_threads, "threads")?;
        Ok(self.threads.lock().unwrap().get(&thread_id.0).cloned())
    }

    async fn upsert(&self, state: &ThreadState) -> Result<(), RespondaError> {
        self.check(&self.fail_threads, "threads")?;
        self.threads
            .lock()
            .unwrap()
            .insert(state.thread_id.0.clone(), state.clone());
        Ok(())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn append(&self, event: &EventRecord) -> Result<(), RespondaError> {
        self.check(&self.fail_events, "events")?;
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

#[async_trait]
impl RuleStore for MemoryStore {
    async fn active_rules(&self, affiliate_id: &str) -> Result<Vec<ReplyRule>, RespondaError> {
        self.check(&self.fail_rules, "rules")?;
        Ok(self
            .rules
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.is_active
                    && (r.affiliate_id.is_none() || r.affiliate_id.as_deref() == Some(affiliate_id))
            })
            .cloned()
            .collect())
    }
}
