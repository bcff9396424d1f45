//! Commit message composition

use crate::catalog;

/// Build a commit message from a type keyword, summary and detail bullets
///
/// ```text
/// 🐛 fix: handle empty config
///
/// 详细描述：
/// - default missing keys
/// - add regression test
/// ```
///
/// Unknown keywords fall back to `feat`; an empty detail list leaves the
/// bullet block empty.
pub fn build_message(commit_type: &str, short_desc: &str, details: &[String]) -> String {
    let ty = catalog::lookup(commit_type);
    let bullets = details
        .iter()
        .map(|d| format!("- {}", d))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{} {}: {}\n\n详细描述：\n{}",
        ty.emoji, ty.name, short_desc, bullets
    )
}
