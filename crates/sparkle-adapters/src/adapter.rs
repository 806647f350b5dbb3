// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A constructed adapter and the per-client handle that tracks its connection.

use std::sync::Arc;

use sparkle_core::{CommandResult, ConnectionState, Language};
use sparkle_exec::{CommandRequest, Invoker};
use sparkle_skill::{CommandTool, Tool, ToolRegistry};
use tracing::debug;

use crate::spec::AdapterSpec;

/// One generator's tools, bound to an invocation policy.
pub struct Adapter {
    spec: &'static AdapterSpec,
    invoker: Invoker,
    tools: Vec<Arc<dyn Tool>>,
}

impl Adapter {
    pub fn new(spec: &'static AdapterSpec, invoker: Invoker) -> Self {
        Self::with_working_dir(spec, invoker, None)
    }

    /// Like [`Adapter::new`], running tools in `working_dir` when the call
    /// names no site root.
    pub fn with_working_dir(
        spec: &'static AdapterSpec,
        invoker: Invoker,
        working_dir: Option<Arc<str>>,
    ) -> Self {
        let tools = spec
            .tools
            .iter()
            .chain(std::iter::once(&spec.version))
            .map(|tool| {
                Arc::new(
                    CommandTool::new(tool, spec.binary, invoker)
                        .with_working_dir(working_dir.clone()),
                ) as Arc<dyn Tool>
            })
            .collect();

        Self {
            spec,
            invoker,
            tools,
        }
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn language(&self) -> Language {
        self.spec.language
    }

    pub fn description(&self) -> &'static str {
        self.spec.description
    }

    pub fn binary(&self) -> &'static str {
        self.spec.binary
    }

    pub fn spec(&self) -> &'static AdapterSpec {
        self.spec
    }

    /// The adapter's tools, version tool last.
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    /// Adds every tool of this adapter to `registry`.
    pub fn register_tools(&self, registry: &mut ToolRegistry) {
        for tool in &self.tools {
            registry.register(Arc::clone(tool));
        }
    }

    /// Runs the version command. Success means the binary is usable.
    pub async fn probe(&self) -> CommandResult {
        let request = CommandRequest::new(
            self.spec.binary,
            self.spec.version.command.iter().copied(),
        );
        let result = self.invoker.run(&request).await;
        debug!(adapter = self.spec.key, success = result.success, "version probe");
        result
    }

    /// A fresh, disconnected handle to this adapter.
    pub fn handle(self: &Arc<Self>) -> AdapterHandle {
        AdapterHandle::new(Arc::clone(self))
    }
}

impl std::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("key", &self.spec.key)
            .field("binary", &self.spec.binary)
            .field("tools", &self.tools.len())
            .finish()
    }
}

/// A caller's view of an adapter with its own connection flag.
///
/// Two handles to the same adapter never share connection state.
#[derive(Debug, Clone)]
pub struct AdapterHandle {
    adapter: Arc<Adapter>,
    state: ConnectionState,
}

impl AdapterHandle {
    pub fn new(adapter: Arc<Adapter>) -> Self {
        Self {
            adapter,
            state: ConnectionState::default(),
        }
    }

    pub fn adapter(&self) -> &Arc<Adapter> {
        &self.adapter
    }

    /// Probes the binary and records whether it answered.
    pub async fn connect(&mut self) -> bool {
        let result = self.adapter.probe().await;
        self.state.record_probe(result.success);
        self.state.is_connected()
    }

    pub fn disconnect(&mut self) {
        self.state.reset();
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sparkle_skill::ToolSpec;

    static ECHO: AdapterSpec = AdapterSpec {
        key: "echo",
        name: "Echo",
        language: Language::Rust,
        binary: "echo",
        description: "Echo test adapter",
        version: crate::spec::version_tool("echo_version", "Echo a version", &["1.0.0"]),
        tools: &[ToolSpec {
            name: "echo_build",
            description: "Echo build",
            command: &["build"],
            params: &[],
        }],
    };

    static MISSING: AdapterSpec = AdapterSpec {
        key: "missing",
        name: "Missing",
        language: Language::Rust,
        binary: "sparkle-no-such-generator",
        description: "Adapter whose binary is not installed",
        version: crate::spec::version_tool("missing_version", "Version", &["--version"]),
        tools: &[],
    };

    #[test]
    fn version_tool_comes_last() {
        let adapter = Adapter::new(&ECHO, Invoker::new());
        let names: Vec<_> = adapter.tools().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, ["echo_build", "echo_version"]);
    }

    #[test]
    fn registers_into_tool_registry() {
        let adapter = Adapter::new(&ECHO, Invoker::new());
        let mut registry = ToolRegistry::new();
        adapter.register_tools(&mut registry);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("echo_version").is_some());
    }

    #[tokio::test]
    async fn probe_runs_version_command() {
        let adapter = Adapter::new(&ECHO, Invoker::new());
        let result = adapter.probe().await;
        assert!(result.success);
        assert!(result.stdout.contains("1.0.0"));
    }

    #[tokio::test]
    async fn connect_and_disconnect() {
        let adapter = Arc::new(Adapter::new(&ECHO, Invoker::new()));
        let mut handle = adapter.handle();
        assert!(!handle.is_connected());
        assert!(handle.connect().await);
        assert!(handle.is_connected());
        handle.disconnect();
        assert!(!handle.is_connected());
    }

    #[tokio::test]
    async fn connect_fails_for_missing_binary() {
        let adapter = Arc::new(Adapter::new(&MISSING, Invoker::new()));
        let mut handle = adapter.handle();
        assert!(!handle.connect().await);
        assert!(!handle.is_connected());
    }

    #[tokio::test]
    async fn handles_do_not_share_state() {
        let adapter = Arc::new(Adapter::new(&ECHO, Invoker::new()));
        let mut first = adapter.handle();
        let second = adapter.handle();
        assert!(first.connect().await);
        assert!(!second.is_connected());
    }

    #[tokio::test]
    async fn tool_lookup_executes() {
        let adapter = Adapter::new(&ECHO, Invoker::new());
        let tool = adapter.tool("echo_build").unwrap();
        let result = tool.execute(json!({})).await;
        assert_eq!(result.stdout.trim(), "build");
        assert!(adapter.tool("zola_build").is_none());
    }
}
