// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the validator, invoker, tools and adapters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Exit code reported for every failure that happened before or instead of
/// a process exit: validation rejections and launch errors.
pub const FAILURE_CODE: i32 = 1;

/// Structured outcome of a tool or command invocation.
///
/// `success` is true only when the process ran and exited with status 0.
/// Validation failures carry [`FAILURE_CODE`] and a reason in `stderr`, with
/// no process ever spawned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandResult {
    /// A failure that never reached (or never completed) process creation.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::failure(reason, FAILURE_CODE)
    }

    /// A failure with an explicit exit code and empty stdout.
    pub fn failure(stderr: impl Into<String>, code: i32) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            code,
        }
    }
}

/// Implementation language of a static site generator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Language {
    Clojure,
    #[strum(serialize = "Common Lisp")]
    #[serde(rename = "Common Lisp")]
    CommonLisp,
    Crystal,
    D,
    Elixir,
    Erlang,
    #[strum(serialize = "F#")]
    #[serde(rename = "F#")]
    FSharp,
    Haskell,
    Julia,
    Kotlin,
    Nim,
    OCaml,
    Racket,
    Rust,
    Scala,
    Swift,
    Tcl,
}

/// Last-known reachability of an adapter's binary.
///
/// Owned by whoever holds the adapter handle; there is no process-wide flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionState {
    connected: bool,
}

impl ConnectionState {
    /// Records the outcome of a version probe.
    pub fn record_probe(&mut self, succeeded: bool) {
        self.connected = succeeded;
    }

    /// Marks the adapter as disconnected.
    pub fn reset(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}
