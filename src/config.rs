//! Configuration for arbor.
//!
//! Supports environment variable overrides for the walker's directory
//! denylist.
//!
//! # Environment Variables
//!
//! - `ARBOR_SKIP_DIRS`: comma-separated directory names to skip in addition
//!   to the built-in denylist (checked once per walk in `indexer::walker`).

use std::collections::HashSet;

/// Directory names never descended into during a project walk: version
/// control metadata, virtual environments, caches, and build output.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    ".venv",
    "venv",
    ".mypy_cache",
    ".pytest_cache",
    ".tox",
    "node_modules",
    "target",
    "build",
    "dist",
];

/// Effective denylist: the built-in set plus any `ARBOR_SKIP_DIRS` entries.
pub fn skip_dirs() -> HashSet<String> {
    let mut dirs: HashSet<String> = SKIP_DIRS.iter().map(|s| s.to_string()).collect();
    if let Ok(extra) = std::env::var("ARBOR_SKIP_DIRS") {
        for name in extra.split(',') {
            let name = name.trim();
            if !name.is_empty() {
                dirs.insert(name.to_string());
            }
        }
    }
    dirs
}
