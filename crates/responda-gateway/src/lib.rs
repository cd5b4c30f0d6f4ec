// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook HTTP gateway for the Responda decision engine.
//!
//! One strict-JSON ingest route carrying the normalized message plus the
//! Bearer instance credential, and an unauthenticated health endpoint.
//! Payload-format tolerance (content sniffing, form decoding) is the
//! upstream transport's problem, not this crate's.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, HealthState, ServerConfig, build_router, start_server};
