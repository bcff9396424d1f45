//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging
//! - **Results**: [`text_with_payload`] pairs human text with a structured payload
//! - **Errors**: [`ResultExt`] and helpers for MCP-compatible errors
//! - **Embeddable**: [`EmbeddableMcp`] for in-process tool dispatch

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{IntoMcpError, McpResult, ResultExt};
pub use init::{init_tracing, LogFormat, ParseLogFormatError};
pub use result::{first_text, text_with_payload};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
