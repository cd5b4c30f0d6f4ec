// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decision orchestration.
//!
//! One inbound message in, one decision out, in a fixed order: resolve
//! instance, load prior thread state, apply learning signals to the
//! previously served template, classify, derive style and stage, pick a
//! reply (rule override, then template, then scripted fallback), persist.
//! Only instance resolution is fatal; every other store failure is logged
//! and the decision degrades to defaults.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, warn};

use responda_config::RespondaConfig;
use responda_core::{
    Decision, DirectoryStore, EventRecord, EventStore, InboundMessage, Intent, RuleStore, Stage,
    TemplateStore, ThreadState, ThreadStore, ThreadType,
};

use crate::fallback::{CONFIG_ERROR_REPLY, DISCLOSURE, scripted_reply};
use crate::intent::classify_intent;
use crate::learning;
use crate::render::{ReplyContext, render};
use crate::rules::match_rule;
use crate::sampler::UniformSource;
use crate::selector::select;
use crate::stage::next_stage;
use crate::thread::{classify_thread_type, thread_id, thread_ref};

/// Maximum characters kept in the reply preview columns.
const REPLY_PREVIEW_CHARS: usize = 200;

/// Engine tunables, extracted from the loaded configuration once at
/// construction. The engine never reads process-wide state.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Persona used when the tenant has no `agent_name`.
    pub default_agent_name: String,
    pub site_url: String,
    pub product_name: String,
    pub product_price: String,
    pub exploit_probability: f64,
    pub explore_top_k: usize,
    pub max_candidates: usize,
    pub freshness_window_secs: u64,
    pub engagement_score_delta: i64,
    pub win_score_delta: i64,
    pub menu_enabled: bool,
    pub disclosure_enabled: bool,
}

impl EngineSettings {
    /// Extract engine settings from a loaded configuration.
    pub fn from_config(config: &RespondaConfig) -> Self {
        Self {
            default_agent_name: config.agent.name.clone(),
            site_url: config.engine.site_url.clone(),
            product_name: config.engine.product_name.clone(),
            product_price: config.engine.product_price.clone(),
            exploit_probability: config.engine.exploit_probability,
            explore_top_k: config.engine.explore_top_k,
            max_candidates: config.engine.max_candidates,
            freshness_window_secs: config.engine.freshness_window_secs,
            engagement_score_delta: config.engine.engagement_score_delta,
            win_score_delta: config.engine.win_score_delta,
            menu_enabled: config.engine.menu_enabled,
            disclosure_enabled: config.engine.disclosure_enabled,
        }
    }
}

/// The conversational decision engine.
///
/// Stateless per invocation: all cross-invocation coordination happens
/// through the injected stores, so concurrent decisions only contend on
/// the persistence layer.
pub struct DecisionEngine {
    settings: EngineSettings,
    directory: Arc<dyn DirectoryStore>,
    templates: Arc<dyn TemplateStore>,
    threads: Arc<dyn ThreadStore>,
    events: Arc<dyn EventStore>,
    rules: Arc<dyn RuleStore>,
    sampler: Arc<dyn UniformSource>,
}

impl DecisionEngine {
    pub fn new(
        settings: EngineSettings,
        directory: Arc<dyn DirectoryStore>,
        templates: Arc<dyn TemplateStore>,
        threads: Arc<dyn ThreadStore>,
        events: Arc<dyn EventStore>,
        rules: Arc<dyn RuleStore>,
        sampler: Arc<dyn UniformSource>,
    ) -> Self {
        Self {
            settings,
            directory,
            templates,
            threads,
            events,
            rules,
            sampler,
        }
    }

    /// Decide the reply for one inbound message.
    pub async fn decide(&self, instance_key: &str, msg: &InboundMessage) -> Decision {
        self.decide_at(instance_key, msg, Utc::now()).await
    }

    /// Decide with an explicit arrival time (exposed for deterministic tests).
    pub async fn decide_at(
        &self,
        instance_key: &str,
        msg: &InboundMessage,
        now: DateTime<Utc>,
    ) -> Decision {
        let thread_type = classify_thread_type(msg);
        let tref = thread_ref(thread_type, msg);
        let tid = thread_id(thread_type, instance_key, &tref);

        // Instance resolution is the only fatal step: unknown or disabled
        // credentials short-circuit before any state is touched.
        let instance = match self.directory.instance(instance_key).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "instance lookup failed");
                None
            }
        };
        let Some(instance) = instance.filter(|i| i.is_active) else {
            debug!(thread_id = %tid, "unresolvable instance, refusing decision");
            return Decision {
                ok: false,
                reply: CONFIG_ERROR_REPLY.to_string(),
                intent: Intent::General,
                style: default_style(thread_type).to_string(),
                stage: Stage::ErrNoInstance,
                template_id: None,
                thread_id: tid.0,
                affiliate_id: None,
            };
        };

        // An inactive tenant only loses its persona override; the decision
        // continues with defaults.
        let affiliate = match self.directory.affiliate(&instance.affiliate_id).await {
            Ok(record) => record.filter(|a| a.is_active),
            Err(e) => {
                warn!(error = %e, affiliate_id = %instance.affiliate_id, "affiliate lookup failed");
                None
            }
        };

        let style = affiliate
            .as_ref()
            .and_then(|a| a.agent_style.clone())
            .unwrap_or_else(|| default_style(thread_type).to_string());

        // Empty messages get an empty reply without classification,
        // learning, or persistence.
        let text = msg.message.trim();
        if text.is_empty() {
            return Decision {
                ok: true,
                reply: String::new(),
                intent: Intent::General,
                style,
                stage: Stage::FirstContact,
                template_id: None,
                thread_id: tid.0,
                affiliate_id: Some(instance.affiliate_id),
            };
        }

        let prior = match self.threads.fetch(&tid).await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, thread_id = %tid, "thread fetch failed");
                None
            }
        };

        // Learning signals target the template served on a previous turn,
        // before this turn's own selection can interfere.
        let signals = learning::evaluate(
            prior.as_ref(),
            text,
            now,
            self.settings.freshness_window_secs,
        );
        if let Some(prev_template) = signals.template_id.as_deref() {
            if signals.engagement
                && let Err(e) = self
                    .templates
                    .record_engagement(prev_template, self.settings.engagement_score_delta)
                    .await
            {
                warn!(error = %e, template_id = prev_template, "engagement update failed");
            }
            if signals.win
                && let Err(e) = self
                    .templates
                    .record_win(prev_template, self.settings.win_score_delta)
                    .await
            {
                warn!(error = %e, template_id = prev_template, "win update failed");
            }
        }

        let intent = classify_intent(text, thread_type, self.settings.menu_enabled);
        let stage = next_stage(prior.as_ref().map(|p| p.stage), intent);

        let ctx = ReplyContext {
            agent_name: affiliate
                .as_ref()
                .and_then(|a| a.agent_name.clone())
                .unwrap_or_else(|| self.settings.default_agent_name.clone()),
            sender_name: msg.sender.trim().to_string(),
            product_name: self.settings.product_name.clone(),
            product_price: self.settings.product_price.clone(),
            site_url: self.settings.site_url.clone(),
        };

        let (mut reply, chosen) = self
            .compose_reply(&instance.affiliate_id, msg, intent, &style, thread_type, &ctx)
            .await;

        if self.settings.disclosure_enabled
            && thread_type == ThreadType::Private
            && matches!(
                intent,
                Intent::Identity | Intent::Purchase | Intent::Activation
            )
        {
            reply.push_str("\n\n");
            reply.push_str(&render(DISCLOSURE, &ctx));
        }

        // Persistence is best-effort: the reply has already been computed
        // and is returned regardless.
        let now_iso = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let state = ThreadState {
            thread_id: tid.clone(),
            instance_key: instance_key.to_string(),
            affiliate_id: instance.affiliate_id.clone(),
            thread_type,
            thread_ref: tref,
            stage,
            intent: Some(intent),
            style: style.clone(),
            last_template_id: chosen.as_ref().map(|(id, _)| id.clone()),
            last_template_variant: chosen.as_ref().and_then(|(_, variant)| variant.clone()),
            last_in_at: Some(now_iso.clone()),
            last_out_at: Some(now_iso.clone()),
            last_reply_preview: Some(preview(&reply)),
        };
        if let Err(e) = self.threads.upsert(&state).await {
            warn!(error = %e, thread_id = %tid, "thread upsert failed");
        }

        let event = EventRecord {
            source: if msg.app.trim().is_empty() {
                "unknown".to_string()
            } else {
                msg.app.trim().to_string()
            },
            thread_id: tid.0.clone(),
            instance_key: instance_key.to_string(),
            sender: msg.sender.clone(),
            message: msg.message.clone(),
            intent,
            style: style.clone(),
            stage,
            template_id: chosen.as_ref().map(|(id, _)| id.clone()),
            reply_preview: preview(&reply),
            created_at: now_iso,
        };
        if let Err(e) = self.events.append(&event).await {
            warn!(error = %e, thread_id = %tid, "event append failed");
        }

        Decision {
            ok: true,
            reply,
            intent,
            style,
            stage,
            template_id: chosen.map(|(id, _)| id),
            thread_id: tid.0,
            affiliate_id: Some(instance.affiliate_id),
        }
    }

    /// Pick the reply body: rule override, then template selection, then
    /// scripted fallback. Returns the rendered reply and, when a template
    /// was served, its `(id, variant)`.
    async fn compose_reply(
        &self,
        affiliate_id: &str,
        msg: &InboundMessage,
        intent: Intent,
        style: &str,
        thread_type: ThreadType,
        ctx: &ReplyContext,
    ) -> (String, Option<(String, Option<String>)>) {
        let rules = match self.rules.active_rules(affiliate_id).await {
            Ok(rules) => rules,
            Err(e) => {
                warn!(error = %e, "rule fetch failed");
                Vec::new()
            }
        };
        if let Some(rule) = match_rule(&rules, msg) {
            debug!(rule_id = rule.id, "reply rule override matched");
            return (render(&rule.reply_text, ctx), None);
        }

        let candidates = match self
            .templates
            .candidates(intent, style, self.settings.max_candidates)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, %intent, style, "candidate fetch failed");
                Vec::new()
            }
        };

        match select(
            candidates,
            self.settings.exploit_probability,
            self.settings.explore_top_k,
            self.sampler.as_ref(),
        ) {
            Some(selection) => {
                if let Err(e) = self.templates.record_use(&selection.template.id).await {
                    warn!(error = %e, template_id = %selection.template.id, "use update failed");
                }
                debug!(
                    template_id = %selection.template.id,
                    explored = selection.explored,
                    "template selected"
                );
                let reply = render(&selection.template.body, ctx);
                (
                    reply,
                    Some((selection.template.id, selection.template.variant)),
                )
            }
            None => (scripted_reply(intent, thread_type, ctx), None),
        }
    }
}

/// Default style tag when the tenant does not override it.
fn default_style(thread_type: ThreadType) -> &'static str {
    match thread_type {
        ThreadType::Group => "persuasivo_curto",
        ThreadType::Private => "persuasivo_humano",
    }
}

/// First `REPLY_PREVIEW_CHARS` characters of a reply.
fn preview(reply: &str) -> String {
    reply.chars().take(REPLY_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_styles_by_thread_type() {
        assert_eq!(default_style(ThreadType::Private), "persuasivo_humano");
        assert_eq!(default_style(ThreadType::Group), "persuasivo_curto");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let long = "ã".repeat(300);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 200);
    }

    #[test]
    fn settings_come_from_config() {
        let config = RespondaConfig::default();
        let settings = EngineSettings::from_config(&config);
        assert_eq!(settings.exploit_probability, 0.8);
        assert_eq!(settings.freshness_window_secs, 21_600);
        assert_eq!(settings.default_agent_name, "Responda");
    }
}
