// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversational decision core for Responda.
//!
//! This crate owns the decision semantics: thread identity derivation,
//! deterministic intent classification, conversation-stage tracking,
//! tenant reply-rule overrides, exploit/explore template selection,
//! learning signals, and the per-request orchestration that ties them to
//! the store traits from `responda-core`.

pub mod engine;
pub mod fallback;
pub mod intent;
pub mod learning;
pub mod render;
pub mod rules;
pub mod sampler;
pub mod selector;
pub mod stage;
pub mod thread;

pub use engine::{DecisionEngine, EngineSettings};
pub use fallback::{CONFIG_ERROR_REPLY, scripted_reply};
pub use intent::classify_intent;
pub use render::{ReplyContext, render};
pub use sampler::{ThreadRngSource, UniformSource};
pub use selector::{Selection, select};
pub use stage::next_stage;
pub use thread::{classify_thread_type, thread_id, thread_ref};
