// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `responda-core::types` for use across
//! store trait boundaries. This module re-exports them for convenience
//! within the storage crate.

pub use responda_core::types::{
    AffiliateRecord, EventRecord, InstanceRecord, ReplyRule, TemplateRecord, ThreadState,
};
