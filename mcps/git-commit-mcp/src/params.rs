//! Parameter types for git-commit-mcp tools

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PathParams {
    #[schemars(description = "Git 仓库路径，默认为当前目录")]
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommitMessageParams {
    #[schemars(
        description = "提交类型: feat/fix/docs/style/refactor/perf/test/chore/build/ci/revert/init/ui/config/merge"
    )]
    pub commit_type: String,

    #[schemars(description = "简短描述（不超过50字符）")]
    pub short_desc: String,

    #[schemars(description = "详细描述列表，每项一个变更点")]
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommitParams {
    #[schemars(description = "提交信息")]
    pub message: String,

    #[schemars(description = "Git 仓库路径，默认为当前目录")]
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct LogParams {
    #[schemars(description = "显示的提交数量，默认10条")]
    #[serde(default)]
    pub count: Option<i32>,

    #[schemars(description = "Git 仓库路径，默认为当前目录")]
    #[serde(default)]
    pub path: Option<String>,
}

/// Working directory for a tool call: blank or absent means the current
/// directory
pub fn repo_dir(path: Option<&str>) -> PathBuf {
    match path {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_dir_defaults() {
        assert_eq!(repo_dir(None), PathBuf::from("."));
        assert_eq!(repo_dir(Some("")), PathBuf::from("."));
        assert_eq!(repo_dir(Some("  ")), PathBuf::from("."));
        assert_eq!(repo_dir(Some("/srv/repo")), PathBuf::from("/srv/repo"));
    }

    #[test]
    fn test_optional_fields_default() {
        let params: LogParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.count.is_none());
        assert!(params.path.is_none());

        let params: CommitMessageParams = serde_json::from_value(serde_json::json!({
            "commit_type": "feat",
            "short_desc": "add login"
        }))
        .unwrap();
        assert!(params.details.is_empty());
    }

    #[test]
    fn test_commit_requires_message() {
        let result: Result<CommitParams, _> =
            serde_json::from_value(serde_json::json!({ "path": "." }));
        assert!(result.is_err());
    }
}
