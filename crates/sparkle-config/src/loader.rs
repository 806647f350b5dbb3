// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./sparkle.toml` > `~/.config/sparkle/sparkle.toml` >
//! `/etc/sparkle/sparkle.toml`, with `SPARKLE_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SparkleConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/sparkle/sparkle.toml";
pub(crate) const LOCAL_CONFIG: &str = "sparkle.toml";

pub(crate) fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("sparkle/sparkle.toml"))
        .unwrap_or_default()
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sparkle/sparkle.toml`
/// 3. `~/.config/sparkle/sparkle.toml`
/// 4. `./sparkle.toml`
/// 5. `SPARKLE_*` environment variables
pub fn load_config() -> Result<SparkleConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No file lookup, no env.
pub fn load_config_from_str(toml_content: &str) -> Result<SparkleConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SparkleConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SparkleConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SparkleConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SparkleConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// `SPARKLE_EXEC_TIMEOUT_SECS` maps to `exec.timeout_secs`, not
/// `exec.timeout.secs`, so sections are mapped explicitly instead of split on `_`.
fn env_provider() -> Env {
    Env::prefixed("SPARKLE_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("gateway_", "gateway.", 1)
            .replacen("exec_", "exec.", 1)
            .replacen("adapters_", "adapters.", 1);
        mapped.into()
    })
}
