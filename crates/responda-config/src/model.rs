// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Responda decision engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Responda configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RespondaConfig {
    /// Agent persona and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Decision engine tunables.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Webhook gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Agent persona and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Default persona name, used when a tenant has no `agent_name` of its own.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "Responda".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Decision engine configuration.
///
/// Every tunable the engine consumes lives here; the core never reads
/// process-wide state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Site URL substituted for `{{site_url}}` in replies.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Product name substituted for `{{product_name}}` in replies.
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Product price substituted for `{{product_price}}` in replies.
    #[serde(default = "default_product_price")]
    pub product_price: String,

    /// Probability of serving the top-ranked template (exploit branch).
    /// The remaining probability mass explores the top-k uniformly.
    #[serde(default = "default_exploit_probability")]
    pub exploit_probability: f64,

    /// Pool size for the explore branch (capped by the candidate count).
    #[serde(default = "default_explore_top_k")]
    pub explore_top_k: usize,

    /// Upper bound on candidates fetched per selection.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Engagement freshness window in seconds: an inbound message within
    /// this window of the last template-backed reply counts as engagement.
    #[serde(default = "default_freshness_window_secs")]
    pub freshness_window_secs: u64,

    /// Score increment applied on an engagement signal.
    #[serde(default = "default_engagement_score_delta")]
    pub engagement_score_delta: i64,

    /// Score increment applied on a win signal.
    #[serde(default = "default_win_score_delta")]
    pub win_score_delta: i64,

    /// Enable numeric-shortcut menu UX: digit replies map to intents and
    /// unmatched private messages default to `menu` instead of `general`.
    #[serde(default = "default_menu_enabled")]
    pub menu_enabled: bool,

    /// Append the automation disclosure in private threads for
    /// identity/purchase/activation intents.
    #[serde(default = "default_disclosure_enabled")]
    pub disclosure_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            product_name: default_product_name(),
            product_price: default_product_price(),
            exploit_probability: default_exploit_probability(),
            explore_top_k: default_explore_top_k(),
            max_candidates: default_max_candidates(),
            freshness_window_secs: default_freshness_window_secs(),
            engagement_score_delta: default_engagement_score_delta(),
            win_score_delta: default_win_score_delta(),
            menu_enabled: default_menu_enabled(),
            disclosure_enabled: default_disclosure_enabled(),
        }
    }
}

fn default_site_url() -> String {
    "https://consysencia.com/".to_string()
}

fn default_product_name() -> String {
    "Nível 1 — Ativação".to_string()
}

fn default_product_price() -> String {
    "R$25".to_string()
}

fn default_exploit_probability() -> f64 {
    0.8
}

fn default_explore_top_k() -> usize {
    3
}

fn default_max_candidates() -> usize {
    8
}

fn default_freshness_window_secs() -> u64 {
    21_600 // 6 hours
}

fn default_engagement_score_delta() -> i64 {
    1
}

fn default_win_score_delta() -> i64 {
    5
}

fn default_menu_enabled() -> bool {
    false
}

fn default_disclosure_enabled() -> bool {
    true
}

/// Webhook gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address to bind the gateway to.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind the gateway to.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    8787
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("responda").join("responda.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("responda.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}
