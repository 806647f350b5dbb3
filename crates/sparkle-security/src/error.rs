// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed reasons for rejected input.
//!
//! The `Display` text of each variant is exactly what ends up in the
//! `stderr` field of a rejected `CommandResult`.

use thiserror::Error;

/// Why a caller-supplied value was refused before any process was spawned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The binary name contains a path separator.
    #[error("Invalid binary path")]
    BinaryPath,

    /// The binary name is empty or contains a banned character.
    #[error("Invalid binary name")]
    BinaryName,

    /// A process argument failed the argument allow-list.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// The working directory failed path validation.
    #[error("Invalid working directory")]
    WorkingDirectory,

    /// A tool parameter failed its kind-specific check.
    ///
    /// `label` is the human name of the parameter, e.g. `base URL`.
    #[error("Invalid {label}")]
    Parameter { label: String },

    /// A required tool parameter was absent.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
}
