//! Read-only repository handlers: status, log, branch

use std::path::Path;

use mcp_common::{text_with_payload, McpResult};
use rmcp::model::CallToolResult;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::params::{repo_dir, LogParams, PathParams};
use crate::probe::is_repository;
use crate::runner::Git;
use crate::status::format_status;
use crate::types::{
    BranchOutput, CommandResult, GitError, GitResult, LogOutput, StatusOutput, StatusReport,
};

use super::DEFAULT_LOG_COUNT;

/// Summarize working-tree changes
pub async fn git_status(
    git: &Git,
    params: PathParams,
    cancel: &CancellationToken,
) -> McpResult<CallToolResult> {
    let dir = repo_dir(params.path.as_deref());

    match status_report(git, &dir, cancel).await {
        Ok(report) => text_with_payload(
            report.human_text,
            &StatusOutput {
                status: report.machine_summary,
            },
        ),
        Err(GitError::NotARepository(path)) => {
            debug!(path = %path, "status requested outside a repository");
            text_with_payload(
                "❌ 当前目录不是 Git 仓库",
                &StatusOutput {
                    status: "Not a git repository".to_string(),
                },
            )
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "git status failed");
            text_with_payload(
                format!("❌ 获取状态失败: {}", e),
                &StatusOutput {
                    status: "Error".to_string(),
                },
            )
        }
    }
}

async fn status_report(
    git: &Git,
    dir: &Path,
    cancel: &CancellationToken,
) -> GitResult<StatusReport> {
    if !is_repository(dir) {
        return Err(GitError::NotARepository(dir.display().to_string()));
    }
    let raw = git
        .run(dir, &["status", "--porcelain"], cancel)
        .await?
        .into_stdout()?;
    Ok(format_status(&raw))
}

/// Recent commits, one line each
pub async fn git_log(
    git: &Git,
    params: LogParams,
    cancel: &CancellationToken,
) -> McpResult<CallToolResult> {
    let dir = repo_dir(params.path.as_deref());
    let count = params.count.unwrap_or(DEFAULT_LOG_COUNT).to_string();

    let result = git
        .run(&dir, &["log", "--oneline", "-n", &count], cancel)
        .await
        .and_then(CommandResult::into_stdout);

    match result {
        Ok(log) => {
            let text = format!("📜 最近 {} 条提交：\n\n{}", count, log);
            text_with_payload(text.clone(), &LogOutput { log: text })
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "git log failed");
            text_with_payload(
                format!("❌ 获取日志失败: {}", e),
                &LogOutput {
                    log: "Error".to_string(),
                },
            )
        }
    }
}

/// Name of the checked-out branch (empty on a detached HEAD)
pub async fn git_branch(
    git: &Git,
    params: PathParams,
    cancel: &CancellationToken,
) -> McpResult<CallToolResult> {
    let dir = repo_dir(params.path.as_deref());

    let result = git
        .run(&dir, &["branch", "--show-current"], cancel)
        .await
        .and_then(CommandResult::into_stdout);

    match result {
        Ok(out) => {
            let branch = out.trim().to_string();
            text_with_payload(format!("🌿 当前分支: {}", branch), &BranchOutput { branch })
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "git branch failed");
            text_with_payload(
                format!("❌ 获取分支失败: {}", e),
                &BranchOutput {
                    branch: "Error".to_string(),
                },
            )
        }
    }
}
