// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait, registry, and declarative command tools for the Sparkle SSG gateway.
//!
//! This crate provides the [`Tool`] trait that every exposed operation
//! implements, the [`ToolRegistry`] that indexes tools and renders their
//! definitions, and [`CommandTool`], which turns a static [`ToolSpec`] into a
//! tool that validates its parameters and runs a generator binary.

pub mod command;
pub mod spec;
pub mod tool;

pub use command::CommandTool;
pub use spec::{Invocation, ParamKind, ParamSpec, Placement, ToolSpec};
pub use tool::{Tool, ToolRegistry};
