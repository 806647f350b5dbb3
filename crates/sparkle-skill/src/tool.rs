// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry.
//!
//! The [`Tool`] trait is the contract boundary towards any tool-calling
//! transport: a name, a description, a JSON Schema for the input, and an
//! `execute` that always yields a [`CommandResult`]. The [`ToolRegistry`]
//! indexes tools by name and renders their definitions.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sparkle_core::{CommandResult, SparkleError};

/// A schema-described, callable operation.
///
/// `execute` never fails: bad input and process failures are reported in
/// the returned [`CommandResult`].
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's unique name (used for lookup and serialization).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Runs the tool with caller-supplied parameters.
    async fn execute(&self, params: serde_json::Value) -> CommandResult;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Looks up and executes a tool.
    ///
    /// The only error is an unknown tool name; everything else is in the result.
    pub async fn execute(
        &self,
        name: &str,
        params: serde_json::Value,
    ) -> Result<CommandResult, SparkleError> {
        let tool = self
            .get(name)
            .ok_or_else(|| SparkleError::UnknownTool(name.to_string()))?;
        Ok(tool.execute(params).await)
    }

    /// Returns (name, description) pairs for all registered tools, sorted by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Returns tool definitions for all registered tools, sorted by name.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "zola_build",
    ///   "description": "Build the Zola site",
    ///   "inputSchema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "inputSchema": t.input_schema(),
                })
            })
            .collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tool that never spawns anything.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string", "description": "Message to echo" }
                },
                "required": ["message"]
            })
        }

        async fn execute(&self, params: serde_json::Value) -> CommandResult {
            match params["message"].as_str() {
                Some(message) => CommandResult {
                    success: true,
                    stdout: message.to_string(),
                    stderr: String::new(),
                    code: 0,
                },
                None => CommandResult::rejected("Missing required parameter: message"),
            }
        }
    }

    struct NoopTool;

    #[async_trait]
    impl Tool for NoopTool {
        fn name(&self) -> &str {
            "noop"
        }

        fn description(&self) -> &str {
            "Does nothing"
        }

        fn input_schema(&self) -> serde_json::Value {
            serde_json::json!({ "type": "object", "properties": {} })
        }

        async fn execute(&self, _params: serde_json::Value) -> CommandResult {
            CommandResult::rejected("noop")
        }
    }

    #[test]
    fn registers_and_retrieves_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let tool = registry.get("echo");
        assert!(tool.is_some());
        assert_eq!(tool.unwrap().name(), "echo");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn list_is_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(NoopTool));

        let list = registry.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], ("echo", "Echoes the input back"));
        assert_eq!(list[1], ("noop", "Does nothing"));
    }

    #[test]
    fn tool_definitions_use_input_schema_key() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(NoopTool));

        let defs = registry.tool_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0]["name"], "echo");
        assert_eq!(defs[1]["name"], "noop");
        assert_eq!(defs[0]["description"], "Echoes the input back");
        assert_eq!(defs[0]["inputSchema"]["type"], "object");
        assert!(defs[0]["inputSchema"]["properties"]["message"].is_object());
    }

    #[test]
    fn len_and_is_empty() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Arc::new(EchoTool));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn execute_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let result = registry
            .execute("echo", serde_json::json!({"message": "hello world"}))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.stdout, "hello world");
    }

    #[tokio::test]
    async fn execute_unknown_tool_is_an_error() {
        let registry = ToolRegistry::new();
        let err = registry
            .execute("missing", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, SparkleError::UnknownTool(name) if name == "missing"));
    }
}
