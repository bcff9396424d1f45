//! Working-copy detection

use std::fs::Metadata;
use std::path::Path;

/// Whether `path` is the root of a git working copy
///
/// A `.git` directory qualifies, and so does a `.git` file with an
/// executable bit set (worktree and submodule pointer files). Missing or
/// unreadable paths yield `false`.
pub fn is_repository(path: &Path) -> bool {
    match std::fs::metadata(path.join(".git")) {
        Ok(meta) => meta.is_dir() || is_pointer_file(&meta),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn is_pointer_file(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_pointer_file(meta: &Metadata) -> bool {
    meta.is_file()
}
