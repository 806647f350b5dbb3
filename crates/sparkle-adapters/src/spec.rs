// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static description of one generator adapter.

use sparkle_core::Language;
use sparkle_skill::ToolSpec;

/// Everything the gateway knows about one static site generator.
///
/// Pure data: building tools from it and probing the binary happen in
/// [`Adapter`](crate::Adapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterSpec {
    /// Registry key, e.g. `nimblePublisher`.
    pub key: &'static str,
    /// Display name, e.g. `NimblePublisher`.
    pub name: &'static str,
    pub language: Language,
    /// Executable resolved through the search path. Never a path.
    pub binary: &'static str,
    pub description: &'static str,
    /// Version probe; also exposed as a tool and used by `connect`.
    pub version: ToolSpec,
    pub tools: &'static [ToolSpec],
}

/// Builds the `<prefix>_version` tool for an adapter.
pub(crate) const fn version_tool(
    name: &'static str,
    description: &'static str,
    command: &'static [&'static str],
) -> ToolSpec {
    ToolSpec {
        name,
        description,
        command,
        params: &[],
    }
}
