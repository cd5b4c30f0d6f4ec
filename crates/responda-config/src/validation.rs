// SPDX-FileCopyrightText: 2026 Responda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as probability bounds and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::RespondaConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RespondaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !(0.0..=1.0).contains(&config.engine.exploit_probability) {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.exploit_probability must be within 0.0..=1.0, got {}",
                config.engine.exploit_probability
            ),
        });
    }

    if config.engine.explore_top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "engine.explore_top_k must be at least 1".to_string(),
        });
    }

    if config.engine.max_candidates == 0 {
        errors.push(ConfigError::Validation {
            message: "engine.max_candidates must be at least 1".to_string(),
        });
    }

    if config.engine.engagement_score_delta < 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.engagement_score_delta must be non-negative, got {}",
                config.engine.engagement_score_delta
            ),
        });
    }

    if config.engine.win_score_delta < 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.win_score_delta must be non-negative, got {}",
                config.engine.win_score_delta
            ),
        });
    }

    // Validate gateway host is not empty and looks like an IP or hostname
    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
