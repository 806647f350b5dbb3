// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway metadata as reported to clients.

use serde::Serialize;

use crate::registry::AdapterRegistry;

pub const GATEWAY_NAME: &str = "sparkle-ssg";
pub const GATEWAY_DESCRIPTION: &str = "Unified MCP adapters for 28 static site generators";
pub const GATEWAY_LICENSE: &str = "MIT OR AGPL-3.0-or-later";
pub const GATEWAY_ECOSYSTEM: &str = "hyperpolymath";
pub const GATEWAY_HUB: &str = "poly-ssg-mcp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayMetadata {
    pub name: String,
    pub version: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub ecosystem: &'static str,
    pub hub: &'static str,
    pub adapters: Vec<&'static str>,
    pub count: usize,
}

/// Metadata for `registry`. `name` overrides the gateway name when set.
pub fn metadata(registry: &AdapterRegistry, name: Option<&str>) -> GatewayMetadata {
    GatewayMetadata {
        name: name.unwrap_or(GATEWAY_NAME).to_string(),
        version: env!("CARGO_PKG_VERSION"),
        description: GATEWAY_DESCRIPTION,
        license: GATEWAY_LICENSE,
        ecosystem: GATEWAY_ECOSYSTEM,
        hub: GATEWAY_HUB,
        adapters: registry.list_adapters(),
        count: registry.adapter_count(),
    }
}
