// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Learning signal evaluation.
//!
//! Signals always target the template served on a *previous* turn, never
//! the one about to be served in the same decision. The store applies the
//! resulting increments atomically; this module only decides whether a
//! signal fired.

use chrono::{DateTime, Utc};
use responda_core::ThreadState;

/// Confirmation keywords that count as a win (case-insensitive).
const WIN_KEYWORDS: &[&str] = &["ativado", "paguei", "confirmado", "pagamento feito", "comprei"];

/// Signals to apply to the previously served template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LearningSignals {
    /// Template the signals target; `None` means no signal fires.
    pub template_id: Option<String>,
    /// Inbound arrived within the freshness window of the last reply.
    pub engagement: bool,
    /// Message contains a confirmation keyword.
    pub win: bool,
}

/// Whether the message confirms a conversion.
pub fn is_win_message(message: &str) -> bool {
    let text = message.trim().to_lowercase();
    WIN_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Whether `now` falls within `window_secs` after the last outbound reply.
///
/// A missing or unparseable timestamp disables the signal instead of
/// guessing.
pub fn within_freshness_window(
    last_out_at: Option<&str>,
    now: DateTime<Utc>,
    window_secs: u64,
) -> bool {
    let Some(raw) = last_out_at else {
        return false;
    };
    let Ok(last_out) = DateTime::parse_from_rfc3339(raw) else {
        return false;
    };
    let elapsed = now.signed_duration_since(last_out.with_timezone(&Utc));
    elapsed >= chrono::Duration::zero()
        && elapsed <= chrono::Duration::seconds(window_secs as i64)
}

/// Evaluate both signals against the prior thread state.
///
/// The two signals are independent: a fresh confirmation message fires
/// both. A thread that never served a template produces no signal at all.
pub fn evaluate(
    prior: Option<&ThreadState>,
    message: &str,
    now: DateTime<Utc>,
    window_secs: u64,
) -> LearningSignals {
    let Some(prior) = prior else {
        return LearningSignals::default();
    };
    let Some(template_id) = prior.last_template_id.clone() else {
        return LearningSignals::default();
    };

    LearningSignals {
        template_id: Some(template_id),
        engagement: within_freshness_window(prior.last_out_at.as_deref(), now, window_secs),
        win: is_win_message(message),
    }
}
