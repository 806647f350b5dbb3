// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input validation for the Sparkle SSG gateway.
//!
//! Classifies untrusted strings before they reach process creation or
//! URL/network handling. This is an allow-list gate, not a shell escaper:
//! the invoker never runs a shell, so only characters with process-control
//! meaning need to be kept out.

pub mod error;
pub mod sanitize;
pub mod validate;

pub use error::ValidationError;
pub use sanitize::sanitize_path;
pub use validate::{
    check_binary, is_valid_argument, is_valid_interface, is_valid_path, is_valid_port,
    is_valid_port_value, is_valid_url, port_from_value,
};
