// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safe process invocation for the Sparkle SSG gateway.
//!
//! [`safe_invoke`] and [`Invoker::run`] are the only paths from caller input
//! to process creation. Both validate through `sparkle-security` first and
//! report every outcome as a `CommandResult`.

pub mod invoker;

pub use invoker::{CommandRequest, Invoker, TIMEOUT_CODE, safe_invoke};
