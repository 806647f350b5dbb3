// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Sparkle SSG gateway.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Sparkle configuration.
///
/// Every section is optional and defaults to values that reproduce the
/// gateway's built-in behavior.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SparkleConfig {
    /// Gateway identity and logging.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Process invocation policy.
    #[serde(default)]
    pub exec: ExecConfig,

    /// Adapter selection.
    #[serde(default)]
    pub adapters: AdaptersConfig,
}

/// Gateway identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Name reported in gateway metadata.
    #[serde(default = "default_gateway_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            name: default_gateway_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_gateway_name() -> String {
    "sparkle-ssg".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Process invocation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExecConfig {
    /// Kill generator processes that run longer than this. Unset means no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Working directory used when a tool call does not name a site root.
    #[serde(default)]
    pub working_dir: Option<String>,
}

/// Adapter selection configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdaptersConfig {
    /// Registry keys that resolve to `AdapterDisabled` instead of an adapter.
    #[serde(default)]
    pub disabled: Vec<String>,
}
