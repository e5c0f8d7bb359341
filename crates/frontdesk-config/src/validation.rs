// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-zero window sizes and recognized log levels.

use crate::diagnostic::ConfigError;
use crate::model::FrontdeskConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FrontdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !VALID_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                VALID_LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    if config.memory.max_history == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.max_history must be at least 1".to_string(),
        });
    }

    if config.memory.recent_intents == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.recent_intents must be at least 1".to_string(),
        });
    }

    if config.memory.sla_seconds == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.sla_seconds must be at least 1".to_string(),
        });
    }

    if config.escalation.repeat_threshold == 0 {
        errors.push(ConfigError::Validation {
            message: "escalation.repeat_threshold must be at least 1".to_string(),
        });
    }

    if config.escalation.failed_reply_threshold == 0 {
        errors.push(ConfigError::Validation {
            message: "escalation.failed_reply_threshold must be at least 1".to_string(),
        });
    }

    if config.retrieval.top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "retrieval.top_k must be at least 1".to_string(),
        });
    }

    if config.retrieval.memory_top_k == 0 {
        errors.push(ConfigError::Validation {
            message: "retrieval.memory_top_k must be at least 1".to_string(),
        });
    }

    if config.tickets.store_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "tickets.store_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FrontdeskConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_max_history_is_rejected() {
        let mut config = FrontdeskConfig::default();
        config.memory.max_history = 0;
        let errors = validate_config(&config).expect_err("should fail");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("max_history"));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let mut config = FrontdeskConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).expect_err("should fail");
        assert!(errors[0].to_string().contains("log_level"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = FrontdeskConfig::default();
        config.memory.max_history = 0;
        config.escalation.repeat_threshold = 0;
        config.tickets.store_path = "  ".to_string();
        let errors = validate_config(&config).expect_err("should fail");
        assert_eq!(errors.len(), 3, "validation must not fail fast");
    }
}
