// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated process invocation.
//!
//! Every input is checked before anything is spawned. The argument vector
//! goes straight to process creation with no shell in between, and every
//! failure mode comes back as a [`CommandResult`] rather than an error.

use std::process::{Output, Stdio};
use std::time::Duration;

use sparkle_core::CommandResult;
use sparkle_security::{ValidationError, check_binary, is_valid_argument, is_valid_path};
use tokio::process::Command;
use tracing::{debug, warn};

/// Exit code reported when a command is killed for exceeding its timeout.
pub const TIMEOUT_CODE: i32 = 124;

/// A single process invocation: binary name, argument vector, optional cwd.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub binary: String,
    pub args: Vec<String>,
    pub cwd: Option<String>,
}

impl CommandRequest {
    pub fn new<I, S>(binary: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            binary: binary.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Checks binary, arguments and working directory, in that order.
    ///
    /// The first offending argument is the one named in the error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_binary(&self.binary)?;

        if let Some(bad) = self.args.iter().find(|arg| !is_valid_argument(arg)) {
            return Err(ValidationError::Argument(bad.clone()));
        }

        if let Some(cwd) = &self.cwd
            && !is_valid_path(cwd)
        {
            return Err(ValidationError::WorkingDirectory);
        }

        Ok(())
    }
}

/// Invocation policy shared by every command an adapter runs.
///
/// Cheap to copy. Holds no process state: each [`Invoker::run`] call owns
/// its child for exactly the duration of the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invoker {
    timeout: Option<Duration>,
}

impl Invoker {
    /// An invoker that waits for the process however long it takes.
    pub fn new() -> Self {
        Self::default()
    }

    /// An invoker that kills the child once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validates and runs `request`, capturing stdout, stderr and exit code.
    pub async fn run(&self, request: &CommandRequest) -> CommandResult {
        if let Err(reason) = request.validate() {
            warn!(binary = %request.binary, %reason, "command rejected");
            return CommandResult::rejected(reason.to_string());
        }

        let mut command = Command::new(&request.binary);
        command
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &request.cwd {
            command.current_dir(cwd);
        }

        debug!(
            binary = %request.binary,
            args = ?request.args,
            cwd = ?request.cwd,
            "spawning command"
        );

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, command.output()).await {
                Ok(output) => output,
                Err(_) => {
                    warn!(binary = %request.binary, timeout = ?limit, "command timed out");
                    return CommandResult::failure(
                        format!("command timed out after {limit:?}"),
                        TIMEOUT_CODE,
                    );
                }
            },
            None => command.output().await,
        };

        match output {
            Ok(output) => {
                let result = completed(output);
                debug!(binary = %request.binary, code = result.code, "command finished");
                result
            }
            Err(e) => {
                warn!(binary = %request.binary, error = %e, "failed to launch command");
                let message = e.to_string();
                if message.is_empty() {
                    CommandResult::rejected("Command execution failed")
                } else {
                    CommandResult::rejected(message)
                }
            }
        }
    }
}

/// Maps a finished process to its result. A signal death has no exit code
/// and is reported as `-1`; output is decoded lossily.
fn completed(output: Output) -> CommandResult {
    CommandResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code().unwrap_or(-1),
    }
}

/// Validates and runs `binary` with `args` using the default (untimed) policy.
pub async fn safe_invoke<I, S>(binary: &str, args: I, cwd: Option<&str>) -> CommandResult
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut request = CommandRequest::new(binary, args);
    if let Some(cwd) = cwd {
        request = request.with_cwd(cwd);
    }
    Invoker::new().run(&request).await
}
