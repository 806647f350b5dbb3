// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Sparkle SSG gateway.
//!
//! This crate provides the error type and the small value shapes shared by
//! every other crate in the workspace: the [`CommandResult`] returned by every
//! invocation, the generator [`Language`], and the per-handle
//! [`ConnectionState`].

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SparkleError;
pub use types::{CommandResult, ConnectionState, FAILURE_CODE, Language};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_result_uses_failure_code() {
        let result = CommandResult::rejected("Invalid path");
        assert!(!result.success);
        assert_eq!(result.code, FAILURE_CODE);
        assert_eq!(result.stderr, "Invalid path");
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn command_result_serializes_with_flat_fields() {
        let result = CommandResult {
            success: true,
            stdout: "zola 0.19.2\n".into(),
            stderr: String::new(),
            code: 0,
        };
        let json = serde_json::to_value(&result).expect("should serialize");
        assert_eq!(json["success"], true);
        assert_eq!(json["stdout"], "zola 0.19.2\n");
        assert_eq!(json["code"], 0);
    }

    #[test]
    fn unknown_adapter_lists_available_names() {
        let err = SparkleError::UnknownAdapter {
            name: "jekyll".into(),
            available: vec!["zola".into(), "mdbook".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown adapter: jekyll. Available: zola, mdbook"
        );
    }

    #[test]
    fn language_display_and_parse() {
        use std::str::FromStr;

        assert_eq!(Language::FSharp.to_string(), "F#");
        assert_eq!(Language::CommonLisp.to_string(), "Common Lisp");
        assert_eq!(Language::from_str("Rust").unwrap(), Language::Rust);

        let json = serde_json::to_string(&Language::FSharp).expect("should serialize");
        assert_eq!(json, "\"F#\"");
    }

    #[test]
    fn connection_state_tracks_probe_and_reset() {
        let mut state = ConnectionState::default();
        assert!(!state.is_connected());

        state.record_probe(true);
        assert!(state.is_connected());

        state.reset();
        assert!(!state.is_connected());

        state.record_probe(false);
        assert!(!state.is_connected());
    }
}
