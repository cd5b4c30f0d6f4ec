// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tenant reply-rule overrides.
//!
//! Rules are evaluated before template selection, in ascending priority
//! order; the first active rule whose text and scopes match serves its
//! reply directly. Matching is case-insensitive, like the classifier.

use responda_core::{InboundMessage, MatchKind, ReplyRule};

/// Find the first matching rule, if any.
///
/// `rules` is expected in ascending priority order, as the store returns
/// it. Group scope matches against the group name; sender scope matches
/// against either the display name or the phone field.
pub fn match_rule<'a>(rules: &'a [ReplyRule], msg: &InboundMessage) -> Option<&'a ReplyRule> {
    let text = msg.message.trim().to_lowercase();

    rules.iter().find(|rule| {
        rule.is_active && text_matches(rule, &text) && scopes_match(rule, msg)
    })
}

fn text_matches(rule: &ReplyRule, text: &str) -> bool {
    let needle = rule.match_text.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    match rule.match_kind {
        MatchKind::Exact => text == needle,
        MatchKind::Contains => text.contains(&needle),
    }
}

fn scopes_match(rule: &ReplyRule, msg: &InboundMessage) -> bool {
    if let Some(group) = rule.match_group.as_deref()
        && !group.trim().is_empty()
        && msg.group_name.trim().to_lowercase() != group.trim().to_lowercase()
    {
        return false;
    }
    if let Some(sender) = rule.match_sender.as_deref()
        && !sender.trim().is_empty()
    {
        let wanted = sender.trim().to_lowercase();
        let by_name = msg.sender.trim().to_lowercase() == wanted;
        let by_phone = msg.phone.trim().to_lowercase() == wanted;
        if !by_name && !by_phone {
            return false;
        }
    }
    true
}
