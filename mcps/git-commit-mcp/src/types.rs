//! Type definitions for git-commit-mcp

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Command Types
// ============================================================================

/// Captured outcome of one external command
///
/// A nonzero exit is data, not an error; handlers decide how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// Stdout followed by stderr, as a terminal would show them
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        if !out.is_empty() && !self.stderr.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&self.stderr);
        out
    }

    /// Stdout on success, [`GitError::CommandFailed`] otherwise
    pub fn into_stdout(self) -> GitResult<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(GitError::CommandFailed {
                code: self.exit_code.unwrap_or(-1),
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

// ============================================================================
// Status Types
// ============================================================================

/// Category of a working-tree change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Added,
    Modified,
    Deleted,
    Untracked,
}

impl ChangeCategory {
    pub fn icon(self) -> &'static str {
        match self {
            ChangeCategory::Added | ChangeCategory::Untracked => "➕",
            ChangeCategory::Modified => "📝",
            ChangeCategory::Deleted => "➖",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChangeCategory::Added | ChangeCategory::Untracked => "新增",
            ChangeCategory::Modified => "修改",
            ChangeCategory::Deleted => "删除",
        }
    }
}

/// One classified line of `git status --porcelain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub code: String,
    pub path: String,
    pub category: ChangeCategory,
}

/// Rendered status summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub human_text: String,
    pub machine_summary: String,
}

// ============================================================================
// Response Types
// ============================================================================

/// Structured payload for git_status
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusOutput {
    pub status: String,
}

/// Structured payload for generate_commit_message
#[derive(Debug, Serialize, Deserialize)]
pub struct CommitMessageOutput {
    pub message: String,
}

/// Structured payload for git_commit
#[derive(Debug, Serialize, Deserialize)]
pub struct CommitOutput {
    /// "Success" or "Failed"
    pub result: String,
    /// Git's own output for the step that decided the result
    pub detail: String,
}

/// Structured payload for list_commit_types
#[derive(Debug, Serialize, Deserialize)]
pub struct CommitTypesOutput {
    pub types: String,
}

/// Structured payload for git_log
#[derive(Debug, Serialize, Deserialize)]
pub struct LogOutput {
    pub log: String,
}

/// Structured payload for git_branch
#[derive(Debug, Serialize, Deserialize)]
pub struct BranchOutput {
    pub branch: String,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum GitError {
    #[error("not a git repository: {0}")]
    NotARepository(String),

    #[error("exit status {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("command aborted: {0}")]
    ExecutionAborted(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type GitResult<T> = Result<T, GitError>;
