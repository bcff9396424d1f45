//! Scripted [`CommandRunner`] for handler tests

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::runner::{CommandRunner, Git};
use crate::types::{CommandResult, GitError, GitResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

/// Replays queued results in order and records every invocation.
/// Once the queue is drained, commands succeed with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<GitResult<CommandResult>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedRunner {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn git(self: &Arc<Self>) -> Git {
        Git::new(self.clone(), "git")
    }

    pub fn push_ok(&self, stdout: &str) {
        self.push(Ok(CommandResult {
            success: true,
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    pub fn push_fail(&self, stdout: &str, stderr: &str) {
        self.push(Ok(CommandResult {
            success: false,
            exit_code: Some(128),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }));
    }

    pub fn push_err(&self, err: GitError) {
        self.push(Err(err));
    }

    fn push(&self, response: GitResult<CommandResult>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Just the argument lists, joined with spaces
    pub fn commands(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.args.join(" ")).collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
        _cancel: &CancellationToken,
    ) -> GitResult<CommandResult> {
        self.calls.lock().unwrap().push(Call {
            dir: working_dir.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(CommandResult {
                    success: true,
                    exit_code: Some(0),
                    stdout: String::new(),
                    stderr: String::new(),
                })
            })
    }
}
