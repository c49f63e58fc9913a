//! Git diff provider.
//!
//! The indexer never calls git itself; this is the collaborator surface the
//! prompt composer consumes. `None` means the tree has no pending changes.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Unified diff of pending changes in a repository, or `None` when the
/// working tree is clean. With `staged`, only staged changes are diffed;
/// otherwise everything relative to HEAD.
pub fn diff(repo_path: &Path, staged: bool) -> Result<Option<String>> {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repo_path).arg("diff");
    if staged {
        cmd.arg("--cached");
    } else {
        cmd.arg("HEAD");
    }

    let output = cmd.output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(stderr.trim().to_string()));
    }

    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}
