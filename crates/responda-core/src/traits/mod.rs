// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store trait definitions for the Responda persistence boundary.
//!
//! The decision engine only ever talks to these traits; concrete backends
//! (SQLite in `responda-storage`, in-memory mocks in `responda-test-utils`)
//! implement them. All traits use `#[async_trait]` for dynamic dispatch.

pub mod directory;
pub mod events;
pub mod rules;
pub mod templates;
pub mod threads;

// Re-export all traits at the traits module level for convenience.
pub use directory::DirectoryStore;
pub use events::EventStore;
pub use rules::RuleStore;
pub use templates::TemplateStore;
pub use threads::ThreadStore;
