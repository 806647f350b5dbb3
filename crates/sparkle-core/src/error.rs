// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Sparkle SSG gateway.
//!
//! Only conditions the caller is expected to act on are raised as errors.
//! Validation and process failures never appear here; they travel inside
//! [`CommandResult`](crate::types::CommandResult).

use thiserror::Error;

/// The primary error type used across the gateway's registry and command surfaces.
#[derive(Debug, Error)]
pub enum SparkleError {
    /// Lookup of an adapter name that is not registered.
    ///
    /// Carries every valid name so the caller can correct itself without a
    /// second round trip.
    #[error("unknown adapter: {name}. Available: {}", available.join(", "))]
    UnknownAdapter {
        name: String,
        available: Vec<String>,
    },

    /// The adapter is registered but disabled by configuration.
    #[error("adapter disabled: {name}")]
    AdapterDisabled { name: String },

    /// Lookup of a tool name that no adapter provides.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Caller input that could not be interpreted, e.g. malformed JSON.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
