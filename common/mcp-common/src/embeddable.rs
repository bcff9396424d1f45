//! In-process tool dispatch
//!
//! [`EmbeddableMcp`] lets a host call an MCP server's tools by name without
//! going through a transport. Servers built with `#[tool_router]` list their
//! tools from the router and route `call_tool` to the same handlers the
//! protocol path uses.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use git_commit_mcp::GitCommitMcpServer;
//!
//! let server = GitCommitMcpServer::new();
//! let result = server
//!     .call_tool("git_branch", serde_json::json!({ "path": "/srv/repo" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for in-process tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool is registered under this name
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters did not match the tool's schema
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The handler returned a protocol error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for in-process tool calls
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be called directly
///
/// Implementations must be `Send + Sync`; calls may arrive concurrently
/// from several tasks.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the name used in MCP client configuration
    fn server_name(&self) -> &str;

    /// All registered tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run the tool `name` with JSON `params`
    ///
    /// Unknown names yield [`EmbeddableError::ToolNotFound`]; parameters
    /// that fail to deserialize yield [`EmbeddableError::InvalidParams`].
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Optional one-line description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }
}
