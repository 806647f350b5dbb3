// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations. Each returns the JSON document to print.

use serde::Serialize;
use serde_json::Value;
use sparkle_adapters::{AdapterRegistry, GatewayMetadata, metadata};
use sparkle_config::SparkleConfig;
use sparkle_core::{CommandResult, Language, SparkleError};
use sparkle_skill::ToolRegistry;

/// One row of `sparkle adapters`.
#[derive(Debug, Serialize)]
pub struct AdapterSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub language: Language,
    pub binary: &'static str,
    pub description: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub adapter: String,
    pub binary: &'static str,
    pub connected: bool,
}

pub fn adapters(registry: &AdapterRegistry) -> Vec<AdapterSummary> {
    registry
        .list_adapters()
        .into_iter()
        .filter_map(|key| registry.spec(key))
        .map(|spec| AdapterSummary {
            key: spec.key,
            name: spec.name,
            language: spec.language,
            binary: spec.binary,
            description: spec.description,
            disabled: registry.is_disabled(spec.key),
        })
        .collect()
}

/// Tool definitions of one adapter, sorted by name.
pub fn tools(registry: &AdapterRegistry, adapter: &str) -> Result<Vec<Value>, SparkleError> {
    let adapter = registry.get_adapter(adapter)?;
    let mut tools = ToolRegistry::new();
    adapter.register_tools(&mut tools);
    Ok(tools.tool_definitions())
}

pub async fn call(
    registry: &AdapterRegistry,
    tool: &str,
    params: Option<&str>,
) -> Result<CommandResult, SparkleError> {
    let params = match params {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| SparkleError::InvalidInput(format!("--params is not JSON: {e}")))?,
        None => Value::Object(Default::default()),
    };
    if !params.is_object() {
        return Err(SparkleError::InvalidInput(
            "--params must be a JSON object".to_string(),
        ));
    }

    let tool = registry.find_tool(tool)?;
    Ok(tool.execute(params).await)
}

pub async fn probe(
    registry: &AdapterRegistry,
    adapter: &str,
) -> Result<ProbeReport, SparkleError> {
    let adapter = registry.get_adapter(adapter)?;
    let mut handle = adapter.handle();
    let connected = handle.connect().await;
    Ok(ProbeReport {
        adapter: adapter.key().to_string(),
        binary: adapter.binary(),
        connected,
    })
}

pub fn gateway_metadata(registry: &AdapterRegistry, config: &SparkleConfig) -> GatewayMetadata {
    metadata(registry, Some(&config.gateway.name))
}
