//! `git status --porcelain` formatting

use crate::types::{ChangeCategory, ChangeRecord, StatusReport};

const CLEAN_TEXT: &str = "✅ 工作区干净，没有变更";
const HEADER: &str = "📊 变更导图：\n\n";

/// Classify a two-character porcelain status code
///
/// First match wins. Codes outside these rules (renames, copies,
/// unmerged states) return `None` and are left out of the report.
pub fn classify(code: &str) -> Option<ChangeCategory> {
    let mut chars = code.chars();
    let index = chars.next()?;
    let worktree = chars.next()?;

    if code == "??" {
        Some(ChangeCategory::Untracked)
    } else if index == 'M' || worktree == 'M' {
        Some(ChangeCategory::Modified)
    } else if index == 'D' || worktree == 'D' {
        Some(ChangeCategory::Deleted)
    } else if index == 'A' {
        Some(ChangeCategory::Added)
    } else {
        None
    }
}

/// Parse porcelain output into change records, in input order
pub fn parse(raw: &str) -> Vec<ChangeRecord> {
    raw.lines()
        .filter_map(|line| {
            let code = line.get(..2)?;
            let path = line.get(3..)?;
            let category = classify(code)?;
            Some(ChangeRecord {
                code: code.to_string(),
                path: path.to_string(),
                category,
            })
        })
        .collect()
}

/// Render porcelain output as a change summary
pub fn format_status(raw: &str) -> StatusReport {
    if raw.trim().is_empty() {
        return StatusReport {
            human_text: CLEAN_TEXT.to_string(),
            machine_summary: "Clean".to_string(),
        };
    }

    let mut text = String::from(HEADER);
    for record in parse(raw) {
        text.push_str(&format!(
            "{} {} {}\n",
            record.category.icon(),
            record.category.label(),
            record.path
        ));
    }

    StatusReport {
        machine_summary: text.clone(),
        human_text: text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_clean() {
        for raw in ["", "   ", "\n\n"] {
            let report = format_status(raw);
            assert_eq!(report.human_text, CLEAN_TEXT);
            assert_eq!(report.machine_summary, "Clean");
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify("??"), Some(ChangeCategory::Untracked));
        assert_eq!(classify(" M"), Some(ChangeCategory::Modified));
        assert_eq!(classify("M "), Some(ChangeCategory::Modified));
        assert_eq!(classify("MD"), Some(ChangeCategory::Modified));
        assert_eq!(classify("D "), Some(ChangeCategory::Deleted));
        assert_eq!(classify(" D"), Some(ChangeCategory::Deleted));
        assert_eq!(classify("A "), Some(ChangeCategory::Added));
        assert_eq!(classify("AM"), Some(ChangeCategory::Modified));
        assert_eq!(classify(" A"), None);
        assert_eq!(classify("R "), None);
        assert_eq!(classify("UU"), None);
    }

    #[test]
    fn test_order_preserved() {
        let raw = " M src/b.rs\n?? notes.md\nD  old.txt\nA  src/a.rs\n";
        let report = format_status(raw);
        assert_eq!(
            report.human_text,
            "📊 变更导图：\n\n\
             📝 修改 src/b.rs\n\
             ➕ 新增 notes.md\n\
             ➖ 删除 old.txt\n\
             ➕ 新增 src/a.rs\n"
        );
        assert_eq!(report.human_text, report.machine_summary);
    }

    #[test]
    fn test_leading_space_of_first_line_kept() {
        let records = parse(" M README.md\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, " M");
        assert_eq!(records[0].path, "README.md");
    }

    #[test]
    fn test_rename_and_short_lines_dropped() {
        let raw = "R  old.rs -> new.rs\nM\n?? kept.txt\n";
        let records = parse(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "kept.txt");
        assert_eq!(records[0].category, ChangeCategory::Untracked);

        let report = format_status("R  old.rs -> new.rs\n");
        assert_eq!(report.human_text, HEADER);
    }

    #[test]
    fn test_duplicates_not_merged() {
        let records = parse(" M a.txt\n M a.txt\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_non_ascii_path() {
        let records = parse("?? 文档/说明.md\n");
        assert_eq!(records[0].path, "文档/说明.md");
    }
}
