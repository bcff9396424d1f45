//! Tool handlers
//!
//! Every handler reports git failures inside a normal tool result (human
//! text plus a status field). The only `Err` a handler returns is a
//! payload serialization failure.

mod commit;
mod repo;

pub use commit::*;
pub use repo::*;

/// Default number of commits shown by git_log
pub const DEFAULT_LOG_COUNT: i32 = 10;

#[cfg(test)]
pub(crate) fn result_text(result: &rmcp::model::CallToolResult) -> String {
    mcp_common::first_text(result)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
pub(crate) fn payload_field(result: &rmcp::model::CallToolResult, field: &str) -> String {
    result
        .structured_content
        .as_ref()
        .and_then(|v| v.get(field))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
