//! Result helpers for MCP tool responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::ResultExt;

/// Build a successful result carrying human text and a structured payload
///
/// The text becomes the single content block shown to the model; the
/// payload is serialized into `structured_content` for programmatic
/// consumers.
///
/// ```rust,ignore
/// text_with_payload("🌿 当前分支: main", &BranchOutput { branch: "main".into() })
/// ```
pub fn text_with_payload<T: Serialize>(
    text: impl Into<String>,
    payload: &T,
) -> Result<CallToolResult, McpError> {
    let structured = serde_json::to_value(payload).to_mcp_err()?;
    let mut result = CallToolResult::success(vec![Content::text(text.into())]);
    result.structured_content = Some(structured);
    Ok(result)
}

/// Text of the first text content block, if any
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        rmcp::model::RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
