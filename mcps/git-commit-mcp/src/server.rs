//! MCP Server implementation for conventional git commits
//!
//! Each tool delegates to its handler in [`crate::handlers`]. The rmcp
//! request context supplies the cancellation token that aborts a running
//! git command when the client cancels the call.

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError, Tool,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::handlers;
use crate::params::*;
use crate::runner::Git;

const SERVER_NAME: &str = "git-commit-mcp";

const INSTRUCTIONS: &str = "Git commit MCP server: inspect working-tree status, \
     generate conventional commit messages with emoji prefixes, stage and commit \
     changes, and read recent history and the current branch.";

/// The Git Commit MCP Server
#[derive(Clone)]
pub struct GitCommitMcpServer {
    git: Git,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl GitCommitMcpServer {
    /// Server running the system `git` with default settings
    pub fn new() -> Self {
        Self::with_git(Git::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_git(Git::from_config(&config.git))
    }

    /// Server running git through a caller-supplied runner
    pub fn with_git(git: Git) -> Self {
        Self {
            git,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "获取 Git 仓库状态，显示所有变更文件（新增、修改、删除）")]
    async fn git_status(
        &self,
        Parameters(params): Parameters<PathParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        handlers::git_status(&self.git, params, &context.ct).await
    }

    #[tool(description = "根据提交类型和描述生成符合规范的 Git 提交信息")]
    async fn generate_commit_message(
        &self,
        Parameters(params): Parameters<CommitMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::generate_commit_message(params)
    }

    #[tool(description = "执行 git add 和 git commit，使用指定的提交信息")]
    async fn git_commit(
        &self,
        Parameters(params): Parameters<CommitParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        handlers::git_commit(&self.git, params, &context.ct).await
    }

    #[tool(description = "获取所有支持的提交类型及其说明")]
    async fn list_commit_types(&self) -> Result<CallToolResult, McpError> {
        handlers::list_commit_types()
    }

    #[tool(description = "查看最近的 Git 提交历史")]
    async fn git_log(
        &self,
        Parameters(params): Parameters<LogParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        handlers::git_log(&self.git, params, &context.ct).await
    }

    #[tool(description = "查看当前所在的 Git 分支")]
    async fn git_branch(
        &self,
        Parameters(params): Parameters<PathParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        handlers::git_branch(&self.git, params, &context.ct).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for GitCommitMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = SERVER_NAME.into();
        info.server_info.version = env!("CARGO_PKG_VERSION").into();
        info
    }
}

impl Default for GitCommitMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for GitCommitMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        // Direct calls have no client that could cancel them.
        let cancel = CancellationToken::new();

        match name {
            "git_status" => {
                let params: PathParams = serde_json::from_value(params)?;
                handlers::git_status(&self.git, params, &cancel)
                    .await
                    .map_err(Into::into)
            }

            "generate_commit_message" => {
                let params: CommitMessageParams = serde_json::from_value(params)?;
                handlers::generate_commit_message(params).map_err(Into::into)
            }

            "git_commit" => {
                let params: CommitParams = serde_json::from_value(params)?;
                handlers::git_commit(&self.git, params, &cancel)
                    .await
                    .map_err(Into::into)
            }

            "list_commit_types" => handlers::list_commit_types().map_err(Into::into),

            "git_log" => {
                let params: LogParams = serde_json::from_value(params)?;
                handlers::git_log(&self.git, params, &cancel)
                    .await
                    .map_err(Into::into)
            }

            "git_branch" => {
                let params: PathParams = serde_json::from_value(params)?;
                handlers::git_branch(&self.git, params, &cancel)
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
