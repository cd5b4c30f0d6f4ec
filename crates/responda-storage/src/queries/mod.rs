// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query modules, one per entity.
//!
//! All functions accept `&Database` and run through the single writer.
//! The administrative write functions (upserts/inserts for instances,
//! affiliates, templates, rules) exist for seeding and operational
//! tooling; the decision engine itself only uses the trait surface.

pub mod affiliates;
pub mod events;
pub mod instances;
pub mod rules;
pub mod templates;
pub mod threads;
