//! External command execution
//!
//! Handlers never spawn processes themselves. They go through [`Git`],
//! which delegates to a [`CommandRunner`], so tests can swap in a fake.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::config::GitConfig;
use crate::types::{CommandResult, GitError, GitResult};

/// Runs an external command to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program args..` in `working_dir`
    ///
    /// A nonzero exit is returned as a [`CommandResult`] with
    /// `success = false`. Errors are reserved for commands that could not
    /// start or were aborted through `cancel`.
    async fn run(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> GitResult<CommandResult>;
}

/// [`CommandRunner`] backed by real OS processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
    env_remove: Vec<String>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort commands still running after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Strip these variables from every child environment
    pub fn with_env_remove(mut self, keys: Vec<String>) -> Self {
        self.env_remove = keys;
        self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, cancel), fields(dir = %working_dir.display()))]
    async fn run(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> GitResult<CommandResult> {
        debug!("executing: {} {}", program, args.join(" "));

        if cancel.is_cancelled() {
            return Err(GitError::ExecutionAborted(format!(
                "{} {} cancelled before start",
                program,
                args.join(" ")
            )));
        }

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for key in &self.env_remove {
            cmd.env_remove(key);
        }

        let child = cmd.spawn().map_err(|source| GitError::Spawn {
            program: program.to_string(),
            source,
        })?;

        let deadline = async {
            match self.timeout {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        // Losing either race drops the wait future, and with it the child,
        // which kill_on_drop terminates.
        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(GitError::ExecutionAborted(format!(
                    "{} {} cancelled",
                    program,
                    args.join(" ")
                )));
            }
            _ = deadline => {
                return Err(GitError::ExecutionAborted(format!(
                    "{} {} timed out after {:?}",
                    program,
                    args.join(" "),
                    self.timeout.unwrap_or_default()
                )));
            }
            output = child.wait_with_output() => output.map_err(|source| GitError::Spawn {
                program: program.to_string(),
                source,
            })?,
        };

        let result = CommandResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        debug!(success = result.success, code = ?result.exit_code, "command finished");
        Ok(result)
    }
}

/// The git binary plus the runner that executes it
#[derive(Clone)]
pub struct Git {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Git {
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Real git processes configured from `config`
    pub fn from_config(config: &GitConfig) -> Self {
        let mut runner = ProcessRunner::new().with_env_remove(config.env_remove.clone());
        if let Some(timeout) = config.timeout() {
            runner = runner.with_timeout(timeout);
        }
        Self::new(Arc::new(runner), config.program.clone())
    }

    pub async fn run(
        &self,
        working_dir: &Path,
        args: &[&str],
        cancel: &CancellationToken,
    ) -> GitResult<CommandResult> {
        self.runner
            .run(working_dir, &self.program, args, cancel)
            .await
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::from_config(&GitConfig::default())
    }
}
