// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exploit/explore selection over candidate reply templates.
//!
//! Pure top-1 selection starves low-sample templates of data; pure random
//! selection wastes conversions on known-poor templates. The selector
//! exploits the best-ranked template most of the time and occasionally
//! samples uniformly from the top of the ranking.

use responda_core::TemplateRecord;

use crate::sampler::UniformSource;

/// The outcome of one selection.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The chosen template.
    pub template: TemplateRecord,
    /// Whether the explore branch was taken.
    pub explored: bool,
}

/// Pick a template from the candidate pool, or `None` when the pool is
/// empty (the caller must substitute a scripted fallback).
///
/// Candidates are ranked descending by `(score, wins, uses)`: higher score
/// first, ties broken by more wins, remaining ties by more uses, so
/// battle-tested templates outrank untouched ones. With probability
/// `exploit_probability` the top-ranked template is served; otherwise one
/// of the top `min(explore_top_k, pool)` is drawn uniformly.
pub fn select(
    mut candidates: Vec<TemplateRecord>,
    exploit_probability: f64,
    explore_top_k: usize,
    source: &dyn UniformSource,
) -> Option<Selection> {
    if candidates.is_empty() {
        return None;
    }

    candidates.sort_by(|a, b| {
        (b.score, b.wins, b.uses).cmp(&(a.score, a.wins, a.uses))
    });

    if source.draw() < exploit_probability {
        return Some(Selection {
            template: candidates.swap_remove(0),
            explored: false,
        });
    }

    let k = explore_top_k.min(candidates.len()).max(1);
    let index = ((source.draw() * k as f64) as usize).min(k - 1);
    Some(Selection {
        template: candidates.swap_remove(index),
        explored: true,
    })
}
