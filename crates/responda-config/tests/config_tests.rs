// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Responda configuration system.

use responda_config::diagnostic::suggest_key;
use responda_config::model::RespondaConfig;
use responda_config::{load_and_validate_str, load_config_from_str, to_toml_string};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_responda_config() {
    let toml = r#"
[agent]
name = "Clara"
log_level = "debug"

[engine]
site_url = "https://example.test/"
product_name = "Plano Inicial"
product_price = "R$40"
exploit_probability = 0.85
explore_top_k = 2
max_candidates = 5
freshness_window_secs = 3600
engagement_score_delta = 2
win_score_delta = 10
menu_enabled = true
disclosure_enabled = false

[gateway]
host = "0.0.0.0"
port = 9000

[storage]
database_path = "/tmp/test.db"
wal_mode = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "Clara");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.engine.site_url, "https://example.test/");
    assert_eq!(config.engine.product_name, "Plano Inicial");
    assert_eq!(config.engine.product_price, "R$40");
    assert_eq!(config.engine.exploit_probability, 0.85);
    assert_eq!(config.engine.explore_top_k, 2);
    assert_eq!(config.engine.max_candidates, 5);
    assert_eq!(config.engine.freshness_window_secs, 3600);
    assert_eq!(config.engine.engagement_score_delta, 2);
    assert_eq!(config.engine.win_score_delta, 10);
    assert!(config.engine.menu_enabled);
    assert!(!config.engine.disclosure_enabled);
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 9000);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "Responda");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.engine.exploit_probability, 0.8);
    assert_eq!(config.engine.explore_top_k, 3);
    assert_eq!(config.engine.max_candidates, 8);
    assert_eq!(config.engine.freshness_window_secs, 21_600);
    assert!(!config.engine.menu_enabled);
    assert!(config.engine.disclosure_enabled);
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 8787);
    assert!(config.storage.wal_mode);
}

/// Unknown field in [engine] section produces an error.
#[test]
fn unknown_field_in_engine_produces_error() {
    let toml = r#"
[engine]
prodct_name = "typo"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("prodct_name"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[observability]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("observability"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation overrides merge over TOML values, the way the env provider does.
#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    let config: RespondaConfig = Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.agent.name, "from-env");
}

/// engine.site_url maps as one key, not engine.site.url.
#[test]
fn dotted_override_sets_engine_site_url() {
    use figment::{Figment, providers::Serialized};

    let config: RespondaConfig = Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(("engine.site_url", "https://override.test/"))
        .extract()
        .expect("should set site_url via dot notation");

    assert_eq!(config.engine.site_url, "https://override.test/");
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: RespondaConfig = Figment::new()
        .merge(Serialized::defaults(RespondaConfig::default()))
        .merge(Toml::file("/nonexistent/path/responda.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "Responda");
}

/// Validation failures surface through load_and_validate_str.
#[test]
fn invalid_probability_fails_validation() {
    let toml = r#"
[engine]
exploit_probability = 2.0
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(
        errors
            .iter()
            .any(|e| e.to_string().contains("exploit_probability"))
    );
}

/// A valid config round-trips through the TOML renderer.
#[test]
fn config_round_trips_through_toml() {
    let config = RespondaConfig::default();
    let rendered = to_toml_string(&config).expect("default config should render");
    let reparsed = load_config_from_str(&rendered).expect("rendered TOML should parse");
    assert_eq!(reparsed.agent.name, config.agent.name);
    assert_eq!(
        reparsed.engine.exploit_probability,
        config.engine.exploit_probability
    );
    assert_eq!(reparsed.storage.wal_mode, config.storage.wal_mode);
}

/// Typo suggestions cover the engine section keys.
#[test]
fn diagnostic_suggests_engine_keys() {
    let valid_keys = &[
        "site_url",
        "product_name",
        "product_price",
        "exploit_probability",
        "explore_top_k",
        "max_candidates",
        "freshness_window_secs",
        "engagement_score_delta",
        "win_score_delta",
        "menu_enabled",
        "disclosure_enabled",
    ];
    assert_eq!(
        suggest_key("exploit_probabilty", valid_keys),
        Some("exploit_probability".to_string())
    );
    assert_eq!(suggest_key("qqqqq", valid_keys), None);
}
