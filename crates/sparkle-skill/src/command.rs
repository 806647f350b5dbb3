// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A [`Tool`] backed by a [`ToolSpec`] and an external binary.

use std::sync::Arc;

use async_trait::async_trait;
use sparkle_core::CommandResult;
use sparkle_exec::{CommandRequest, Invoker};
use tracing::debug;

use crate::spec::ToolSpec;
use crate::tool::Tool;

/// Runs one generator command through the safe invoker.
#[derive(Debug, Clone)]
pub struct CommandTool {
    spec: &'static ToolSpec,
    binary: &'static str,
    invoker: Invoker,
    working_dir: Option<Arc<str>>,
}

impl CommandTool {
    pub fn new(spec: &'static ToolSpec, binary: &'static str, invoker: Invoker) -> Self {
        Self {
            spec,
            binary,
            invoker,
            working_dir: None,
        }
    }

    /// Directory to run in when the call does not name a site root.
    pub fn with_working_dir(mut self, dir: Option<Arc<str>>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn spec(&self) -> &'static ToolSpec {
        self.spec
    }

    pub fn binary(&self) -> &'static str {
        self.binary
    }
}

#[async_trait]
impl Tool for CommandTool {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn description(&self) -> &str {
        self.spec.description
    }

    fn input_schema(&self) -> serde_json::Value {
        self.spec.input_schema()
    }

    async fn execute(&self, params: serde_json::Value) -> CommandResult {
        let invocation = match self.spec.build(&params) {
            Ok(invocation) => invocation,
            Err(reason) => {
                debug!(tool = self.spec.name, %reason, "tool parameters rejected");
                return CommandResult::rejected(reason.to_string());
            }
        };

        let mut request = CommandRequest::new(self.binary, invocation.args);
        let cwd = invocation
            .cwd
            .or_else(|| self.working_dir.as_deref().map(str::to_string));
        if let Some(cwd) = cwd {
            request = request.with_cwd(cwd);
        }
        self.invoker.run(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ParamKind, ParamSpec};
    use serde_json::json;
    use sparkle_core::FAILURE_CODE;

    static ECHO: ToolSpec = ToolSpec {
        name: "echo_say",
        description: "Echo a message",
        command: &["say:"],
        params: &[
            ParamSpec::site_root(),
            ParamSpec::positional("message", ParamKind::Text, "Message", "message").required(),
            ParamSpec::switch("loud", "--loud", "Shout"),
        ],
    };

    static BAD_BINARY: ToolSpec = ToolSpec {
        name: "bad_version",
        description: "Version of a binary with a path",
        command: &["--version"],
        params: &[],
    };

    static PWD: ToolSpec = ToolSpec {
        name: "pwd_show",
        description: "Print the working directory",
        command: &[],
        params: &[ParamSpec::site_root()],
    };

    #[tokio::test]
    async fn runs_built_argument_vector() {
        let tool = CommandTool::new(&ECHO, "echo", Invoker::new());
        let result = tool
            .execute(json!({ "message": "hello", "loud": true }))
            .await;
        assert!(result.success, "stderr: {}", result.stderr);
        assert_eq!(result.stdout.trim(), "say: hello --loud");
    }

    #[tokio::test]
    async fn runs_in_site_root() {
        let dir = tempfile::tempdir().unwrap();
        let tool = CommandTool::new(&ECHO, "echo", Invoker::new());
        let result = tool
            .execute(json!({ "message": "hi", "path": dir.path().to_str().unwrap() }))
            .await;
        assert!(result.success);
    }

    #[tokio::test]
    async fn rejects_before_spawning() {
        let tool = CommandTool::new(&ECHO, "echo", Invoker::new());
        let result = tool.execute(json!({ "message": "hi; rm -rf /" })).await;
        assert!(!result.success);
        assert_eq!(result.code, FAILURE_CODE);
        assert_eq!(result.stderr, "Invalid message");
        assert!(result.stdout.is_empty());
    }

    #[tokio::test]
    async fn missing_required_parameter() {
        let tool = CommandTool::new(&ECHO, "echo", Invoker::new());
        let result = tool.execute(json!({})).await;
        assert_eq!(result.stderr, "Missing required parameter: message");
        assert_eq!(result.code, FAILURE_CODE);
    }

    #[tokio::test]
    async fn binary_is_still_checked_by_the_invoker() {
        let tool = CommandTool::new(&BAD_BINARY, "./generator", Invoker::new());
        let result = tool.execute(json!({})).await;
        assert_eq!(result.stderr, "Invalid binary path");
    }

    #[tokio::test]
    async fn falls_back_to_configured_working_dir() {
        let tool = CommandTool::new(&PWD, "pwd", Invoker::new())
            .with_working_dir(Some(Arc::from("/")));
        let result = tool.execute(json!({})).await;
        assert!(result.success, "stderr: {}", result.stderr);
        assert_eq!(result.stdout.trim(), "/");
    }

    #[tokio::test]
    async fn configured_working_dir_is_validated() {
        let tool = CommandTool::new(&PWD, "pwd", Invoker::new())
            .with_working_dir(Some(Arc::from("../../etc")));
        let result = tool.execute(json!({})).await;
        assert_eq!(result.stderr, "Invalid working directory");
    }

    #[test]
    fn exposes_spec_metadata() {
        let tool = CommandTool::new(&ECHO, "echo", Invoker::new());
        assert_eq!(tool.name(), "echo_say");
        assert_eq!(tool.description(), "Echo a message");
        assert_eq!(tool.binary(), "echo");
        assert_eq!(tool.input_schema()["required"], json!(["message"]));
    }
}
