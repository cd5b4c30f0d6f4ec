// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation stage tracking.
//!
//! A small, sticky funnel: threads start at first contact, move to close
//! on purchase intent and to activation on activation intent, and stay
//! put otherwise. Oscillation between close and activation under intent
//! oscillation is accepted behavior, not a defect.

use responda_core::{Intent, Stage};

/// Advance a thread's stage from its prior stage and the classified intent.
pub fn next_stage(prior: Option<Stage>, intent: Intent) -> Stage {
    match intent {
        Intent::Purchase => Stage::Close,
        Intent::Activation => Stage::Activation,
        _ => prior.unwrap_or(Stage::FirstContact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_thread_starts_at_first_contact() {
        assert_eq!(next_stage(None, Intent::General), Stage::FirstContact);
        assert_eq!(next_stage(None, Intent::Pricing), Stage::FirstContact);
    }

    #[test]
    fn purchase_moves_to_close() {
        assert_eq!(next_stage(None, Intent::Purchase), Stage::Close);
        assert_eq!(
            next_stage(Some(Stage::FirstContact), Intent::Purchase),
            Stage::Close
        );
    }

    #[test]
    fn activation_moves_to_activation() {
        assert_eq!(
            next_stage(Some(Stage::FirstContact), Intent::Activation),
            Stage::Activation
        );
    }

    #[test]
    fn other_intents_are_sticky() {
        assert_eq!(
            next_stage(Some(Stage::Close), Intent::Support),
            Stage::Close
        );
        assert_eq!(
            next_stage(Some(Stage::Activation), Intent::General),
            Stage::Activation
        );
    }

    #[test]
    fn close_and_activation_can_oscillate() {
        let mut stage = next_stage(None, Intent::Purchase);
        assert_eq!(stage, Stage::Close);
        stage = next_stage(Some(stage), Intent::Activation);
        assert_eq!(stage, Stage::Activation);
        stage = next_stage(Some(stage), Intent::Purchase);
        assert_eq!(stage, Stage::Close);
    }
}
