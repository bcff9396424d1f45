//! Git Commit MCP - conventional commit workflow server over stdio

use std::path::PathBuf;

use clap::Parser;
use git_commit_mcp::config::{Config, CONFIG_ENV};
use git_commit_mcp::GitCommitMcpServer;
use mcp_common::LogFormat;
use rmcp::{transport::io::stdio, ServiceExt};

#[derive(Debug, Parser)]
#[command(name = "git-commit-mcp", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Log output format on stderr: text or json
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    mcp_common::init_tracing("git_commit_mcp", args.log_format)?;

    tracing::info!("Starting Git Commit MCP server");

    let config = Config::load(args.config.as_deref())?;
    let server = GitCommitMcpServer::with_config(&config);
    let service = server.serve(stdio()).await?;

    tracing::info!("Git Commit MCP server running");

    service.waiting().await?;

    tracing::info!("Git Commit MCP server stopped");

    Ok(())
}
