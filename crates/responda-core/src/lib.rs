// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Responda decision engine.
//!
//! This crate provides the foundational store trait definitions, error
//! types, and domain types used throughout the Responda workspace. The
//! engine crate depends only on these traits, never on a concrete backend.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RespondaError;
pub use types::{
    AffiliateRecord, Decision, EventRecord, InboundMessage, InstanceRecord, Intent, MatchKind,
    ReplyRule, Stage, TemplateRecord, ThreadId, ThreadState, ThreadType,
};

// Re-export all store traits at crate root.
pub use traits::{DirectoryStore, EventStore, RuleStore, TemplateStore, ThreadStore};
