//! Conventional commit type catalog

/// A commit type keyword with its display emoji and description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub name: &'static str,
    pub emoji: &'static str,
    pub desc: &'static str,
}

impl CommitType {
    const fn new(name: &'static str, emoji: &'static str, desc: &'static str) -> Self {
        Self { name, emoji, desc }
    }
}

/// Every supported commit type. The first entry is the fallback.
pub static COMMIT_TYPES: [CommitType; 15] = [
    CommitType::new("feat", "✨", "新增功能"),
    CommitType::new("fix", "🐛", "修复 Bug"),
    CommitType::new("docs", "📝", "文档变更"),
    CommitType::new("style", "💄", "代码格式"),
    CommitType::new("refactor", "♻️", "重构代码"),
    CommitType::new("perf", "⚡️", "性能优化"),
    CommitType::new("test", "✅", "增加测试"),
    CommitType::new("chore", "🔧", "构建/工具变动"),
    CommitType::new("build", "📦", "构建系统变动"),
    CommitType::new("ci", "👷", "CI 配置变动"),
    CommitType::new("revert", "⏪", "回退代码"),
    CommitType::new("init", "🎉", "项目初始化"),
    CommitType::new("ui", "🎨", "更新 UI 样式"),
    CommitType::new("config", "⚙️", "配置文件修改"),
    CommitType::new("merge", "🔀", "合并分支"),
];

/// Look up a commit type by exact, case-sensitive name
///
/// Unknown names resolve to the first catalog entry (`feat`).
pub fn lookup(name: &str) -> &'static CommitType {
    COMMIT_TYPES
        .iter()
        .find(|t| t.name == name)
        .unwrap_or(&COMMIT_TYPES[0])
}

/// Render the catalog as a markdown table
pub fn render_table() -> String {
    let mut table = String::from("📋 支持的提交类型：\n\n");
    table.push_str("| Type | Emoji | 说明 |\n");
    table.push_str("|------|-------|------|\n");
    for t in &COMMIT_TYPES {
        table.push_str(&format!("| {} | {} | {} |\n", t.name, t.emoji, t.desc));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = COMMIT_TYPES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), COMMIT_TYPES.len());
    }

    #[test]
    fn test_lookup_exact() {
        assert_eq!(lookup("fix").emoji, "🐛");
        assert_eq!(lookup("merge").desc, "合并分支");
    }

    #[test]
    fn test_lookup_falls_back_to_feat() {
        assert_eq!(lookup("feature").name, "feat");
        assert_eq!(lookup("").name, "feat");
        // matching is case-sensitive
        assert_eq!(lookup("FIX").name, "feat");
    }

    #[test]
    fn test_render_table_lists_every_type() {
        let table = render_table();
        assert!(table.starts_with("📋 支持的提交类型："));
        assert!(table.contains("| refactor | ♻️ | 重构代码 |"));
        let rows = table.lines().filter(|l| l.starts_with("| ")).count();
        // header row plus one per type
        assert_eq!(rows, COMMIT_TYPES.len() + 1);
    }
}
