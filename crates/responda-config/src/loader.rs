// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./responda.toml` > `~/.config/responda/responda.toml`
//! > `/etc/responda/responda.toml` with environment variable overrides via
//! `RESPONDA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::RespondaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/responda/responda.toml` (system-wide)
/// 3. `~/.config/responda/responda.toml` (user XDG config)
/// 4. `./responda.toml` (local directory)
/// 5. `RESPONDA_*` environment variables
pub fn load_config() -> Result<RespondaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(Toml::file("/etc/responda/responda.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("responda/responda.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("responda.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<RespondaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RespondaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `RESPONDA_ENGINE_SITE_URL`
/// must map to `engine.site_url`, not `engine.site.url`.
fn env_provider() -> Env {
    Env::prefixed("RESPONDA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: RESPONDA_ENGINE_SITE_URL -> "engine_site_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("engine_", "engine.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
