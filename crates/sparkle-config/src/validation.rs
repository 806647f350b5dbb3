// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use sparkle_security::is_valid_path;

use crate::diagnostic::ConfigError;
use crate::model::SparkleConfig;

/// Accepted values for `gateway.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &SparkleConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.gateway.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.name must not be empty".to_string(),
        });
    }

    let level = config.gateway.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "gateway.log_level `{}` is not one of: {}",
                config.gateway.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.exec.timeout_secs == Some(0) {
        errors.push(ConfigError::Validation {
            message: "exec.timeout_secs must be greater than zero; omit it to disable the timeout"
                .to_string(),
        });
    }

    if let Some(dir) = &config.exec.working_dir
        && !is_valid_path(dir)
    {
        errors.push(ConfigError::Validation {
            message: format!("exec.working_dir `{dir}` is not an acceptable path"),
        });
    }

    let mut seen = HashSet::new();
    for (i, name) in config.adapters.disabled.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("adapters.disabled[{i}] must not be empty"),
            });
        } else if !seen.insert(name) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate adapter `{name}` in adapters.disabled"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
