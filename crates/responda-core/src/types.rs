// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types used across store traits and the Responda engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Unique identifier for a conversation thread.
///
/// Always the deterministic `"{type}:{instance}:{ref}"` triple: two calls
/// over the same message shape produce the same id, which is what keeps the
/// thread upsert idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub String);

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a thread is a one-on-one conversation or a group chat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    Private,
    Group,
}

/// Closed set of intent labels produced by the classifier.
///
/// Every inbound message maps to exactly one of these; there is no
/// "unclassified" escape hatch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Pricing,
    Catalog,
    Support,
    HowItWorks,
    Activation,
    Purchase,
    Identity,
    LinkRequest,
    GroupAccess,
    GroupEngage,
    Menu,
    General,
}

/// Coarse funnel position of a thread.
///
/// `ErrNoInstance` is administrative: it marks a decision that failed
/// instance resolution and never reached the funnel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Stage {
    #[strum(serialize = "s0_first_contact")]
    #[serde(rename = "s0_first_contact")]
    FirstContact,
    #[strum(serialize = "s2_close")]
    #[serde(rename = "s2_close")]
    Close,
    #[strum(serialize = "s3_activation")]
    #[serde(rename = "s3_activation")]
    Activation,
    #[strum(serialize = "s_err_no_instance")]
    #[serde(rename = "s_err_no_instance")]
    ErrNoInstance,
}

/// A normalized inbound chat message, produced by the transport boundary.
///
/// The engine never re-parses raw webhook bodies; by the time a message
/// reaches the core it has exactly this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Source application tag (e.g. "whatsapp").
    #[serde(default)]
    pub app: String,
    /// Display name of the sender.
    #[serde(default)]
    pub sender: String,
    /// Message body text.
    #[serde(default)]
    pub message: String,
    /// Group display name; empty for private conversations.
    #[serde(default)]
    pub group_name: String,
    /// Sender phone identifier; empty in some group payloads.
    #[serde(default)]
    pub phone: String,
}

/// A channel-instance record binding an opaque credential to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub instance_key: String,
    pub affiliate_id: String,
    pub is_active: bool,
}

/// A tenant (affiliate) record carrying the reply persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateRecord {
    pub id: String,
    pub display_name: Option<String>,
    /// Persona name substituted for `{{agent_name}}` in replies.
    pub agent_name: Option<String>,
    /// Reply style tag scoping template selection.
    pub agent_style: Option<String>,
    pub is_active: bool,
}

/// A candidate reply template with its learning counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub body: String,
    pub variant: Option<String>,
    pub score: i64,
    pub uses: i64,
    pub wins: i64,
}

/// Mutable per-thread conversation state, upserted on every decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadState {
    pub thread_id: ThreadId,
    pub instance_key: String,
    pub affiliate_id: String,
    pub thread_type: ThreadType,
    pub thread_ref: String,
    pub stage: Stage,
    pub intent: Option<Intent>,
    pub style: String,
    /// Template served on the last outbound reply, if any.
    pub last_template_id: Option<String>,
    pub last_template_variant: Option<String>,
    /// RFC 3339 timestamp of the last inbound message.
    pub last_in_at: Option<String>,
    /// RFC 3339 timestamp of the last outbound reply.
    pub last_out_at: Option<String>,
    /// First 200 characters of the last reply.
    pub last_reply_preview: Option<String>,
}

/// Append-only audit record of one decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Ingest source tag (e.g. "whatauto").
    pub source: String,
    pub thread_id: String,
    pub instance_key: String,
    pub sender: String,
    pub message: String,
    pub intent: Intent,
    pub style: String,
    pub stage: Stage,
    pub template_id: Option<String>,
    pub reply_preview: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// How a reply rule matches against the message body.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Contains,
}

/// A tenant-authored reply override, evaluated before template selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRule {
    pub id: i64,
    /// Owning tenant; `None` means the rule applies to every tenant.
    pub affiliate_id: Option<String>,
    /// Lower priority value is evaluated first.
    pub priority: i64,
    pub match_kind: MatchKind,
    pub match_text: String,
    /// Optional scope: only match in this group (case-insensitive).
    pub match_group: Option<String>,
    /// Optional scope: only match this sender (case-insensitive).
    pub match_sender: Option<String>,
    pub reply_text: String,
    pub is_active: bool,
}

/// The outcome of one decision, returned to the transport caller.
///
/// `ok` is `false` only on instance-resolution failure; `reply` is always
/// present (possibly empty for an empty inbound message).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub ok: bool,
    pub reply: String,
    pub intent: Intent,
    pub style: String,
    pub stage: Stage,
    pub template_id: Option<String>,
    pub thread_id: String,
    pub affiliate_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn intent_labels_round_trip() {
        for intent in Intent::iter() {
            let label = intent.to_string();
            let parsed = Intent::from_str(&label).expect("label should parse back");
            assert_eq!(intent, parsed);
        }
    }

    #[test]
    fn intent_label_set_is_closed() {
        assert_eq!(Intent::iter().count(), 12);
        assert_eq!(Intent::HowItWorks.to_string(), "how_it_works");
        assert_eq!(Intent::GroupEngage.to_string(), "group_engage");
    }

    #[test]
    fn stage_labels_keep_funnel_names() {
        assert_eq!(Stage::FirstContact.to_string(), "s0_first_contact");
        assert_eq!(Stage::Close.to_string(), "s2_close");
        assert_eq!(Stage::Activation.to_string(), "s3_activation");
        assert_eq!(Stage::ErrNoInstance.to_string(), "s_err_no_instance");
        assert_eq!(Stage::from_str("s2_close").unwrap(), Stage::Close);
    }

    #[test]
    fn thread_type_display() {
        assert_eq!(ThreadType::Private.to_string(), "private");
        assert_eq!(ThreadType::Group.to_string(), "group");
    }

    #[test]
    fn decision_serializes_with_snake_case_fields() {
        let decision = Decision {
            ok: true,
            reply: "olá".to_string(),
            intent: Intent::Pricing,
            style: "persuasivo_humano".to_string(),
            stage: Stage::FirstContact,
            template_id: None,
            thread_id: "private:inst1:5551234".to_string(),
            affiliate_id: Some("aff-1".to_string()),
        };
        let json = serde_json::to_string(&decision).expect("should serialize");
        assert!(json.contains("\"intent\":\"pricing\""));
        assert!(json.contains("\"stage\":\"s0_first_contact\""));
        assert!(json.contains("\"template_id\":null"));
    }
}
