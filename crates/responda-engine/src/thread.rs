// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread identity derivation from message shape.
//!
//! A thread id is a pure function of `(type, instance, ref)` with no
//! randomness, so replaying the same logical turn lands on the same row.
//! An empty ref still yields a deterministic (degenerate) id: identity
//! derivation must never block a reply.

use responda_core::{InboundMessage, ThreadId, ThreadType};

/// A message is a group message iff it carries a non-empty group name.
pub fn classify_thread_type(msg: &InboundMessage) -> ThreadType {
    if msg.group_name.trim().is_empty() {
        ThreadType::Private
    } else {
        ThreadType::Group
    }
}

/// The stable reference for a thread: group name for groups, phone for
/// private conversations.
///
/// Group identity keys on the display name because a stable group id is
/// not assumed to exist on the wire; renamed or duplicate-named groups
/// merge or fragment state accordingly.
pub fn thread_ref(thread_type: ThreadType, msg: &InboundMessage) -> String {
    match thread_type {
        ThreadType::Group => msg.group_name.trim().to_string(),
        ThreadType::Private => msg.phone.trim().to_string(),
    }
}

/// Deterministic thread id: `"{type}:{instance}:{ref}"`.
pub fn thread_id(thread_type: ThreadType, instance_key: &str, thread_ref: &str) -> ThreadId {
    ThreadId(format!("{thread_type}:{instance_key}:{thread_ref}"))
}
