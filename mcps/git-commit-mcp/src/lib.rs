//! Git Commit MCP Library
//!
//! Conventional-commit workflow over MCP: working-tree status, emoji
//! commit message generation, stage-and-commit, recent log and current
//! branch. Operations shell out to the `git` binary.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use git_commit_mcp::GitCommitMcpServer;
//! use mcp_common::EmbeddableMcp;
//!
//! let server = GitCommitMcpServer::new();
//! let status = server
//!     .call_tool("git_status", serde_json::json!({ "path": "/srv/repo" }))
//!     .await?;
//! ```

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod message;
pub mod params;
pub mod probe;
pub mod runner;
pub mod server;
pub mod status;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main server type
pub use server::GitCommitMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
