//! Commit handlers: message generation, type catalog, add + commit

use mcp_common::{text_with_payload, McpResult};
use rmcp::model::CallToolResult;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::catalog;
use crate::message::build_message;
use crate::params::{repo_dir, CommitMessageParams, CommitParams};
use crate::runner::Git;
use crate::types::{CommitMessageOutput, CommitOutput, CommitTypesOutput};

const COMMIT_SUCCESS_TEXT: &str = "✅ 提交成功！\n\n💡 如需推送，请执行: git push";

/// Compose a conventional commit message
pub fn generate_commit_message(params: CommitMessageParams) -> McpResult<CallToolResult> {
    let message = build_message(&params.commit_type, &params.short_desc, &params.details);
    text_with_payload(
        format!("📝 生成的提交信息：\n\n```\n{}\n```", message),
        &CommitMessageOutput { message },
    )
}

/// Render the supported commit types as a markdown table
pub fn list_commit_types() -> McpResult<CallToolResult> {
    let table = catalog::render_table();
    text_with_payload(table.clone(), &CommitTypesOutput { types: table })
}

/// Stage everything and commit it
///
/// A failed `git add` stops before `git commit`. A failed `git commit`
/// leaves whatever `git add` staged in the index.
pub async fn git_commit(
    git: &Git,
    params: CommitParams,
    cancel: &CancellationToken,
) -> McpResult<CallToolResult> {
    let dir = repo_dir(params.path.as_deref());

    match git.run(&dir, &["add", "."], cancel).await {
        Ok(add) if add.success => {}
        Ok(add) => return commit_failed("add", add.combined_output()),
        Err(e) => return commit_failed("add", e.to_string()),
    }

    match git
        .run(&dir, &["commit", "-m", &params.message], cancel)
        .await
    {
        Ok(commit) if commit.success => {
            info!(dir = %dir.display(), "commit created");
            text_with_payload(
                COMMIT_SUCCESS_TEXT,
                &CommitOutput {
                    result: "Success".to_string(),
                    detail: commit.stdout.trim().to_string(),
                },
            )
        }
        Ok(commit) => commit_failed("commit", commit.combined_output()),
        Err(e) => commit_failed("commit", e.to_string()),
    }
}

fn commit_failed(step: &str, detail: String) -> McpResult<CallToolResult> {
    warn!(step, detail = %detail.trim(), "git commit flow failed");
    text_with_payload(
        format!("❌ git {} 失败: {}", step, detail),
        &CommitOutput {
            result: "Failed".to_string(),
            detail: detail.trim().to_string(),
        },
    )
}
