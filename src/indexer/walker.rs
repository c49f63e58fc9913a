//! Project walker: sequential directory traversal driving the per-file
//! pipeline.
//!
//! One file is processed fully (parse, extract) before the next; the only
//! state crossing file boundaries is the accumulating record list. Per-file
//! failures are logged and skipped — only a root with no matching source
//! files at all aborts the walk.

use super::extractor::{index_file, QueryEngine};
use super::parser::Parser;
use super::types::{FileIndex, Language};
use crate::config;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Walk a project root and index every matching source file, in path order.
/// A single-file root is indexed on its own.
pub fn walk_project(
    root: &Path,
    language: Language,
    parser: &mut Parser,
    engine: &QueryEngine,
) -> Result<Vec<FileIndex>> {
    if root.is_file() {
        if !matches_language(root, language) {
            return Err(Error::NoSourceFiles {
                root: root.to_path_buf(),
                language,
            });
        }
        return Ok(vec![index_file(root, language, parser, engine)?]);
    }

    if !root.is_dir() {
        return Err(Error::FileAccess {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "path not found"),
        });
    }

    let skip = config::skip_dirs();
    let mut files = Vec::new();
    let mut candidates = 0usize;

    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !(e.file_type().is_dir()
                    && e.file_name()
                        .to_str()
                        .map(|name| skip.contains(name))
                        .unwrap_or(false))
        });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !matches_language(entry.path(), language) {
            continue;
        }
        candidates += 1;

        match index_file(entry.path(), language, parser, engine) {
            Ok(index) => files.push(index),
            Err(Error::EmptyFile(path)) => {
                debug!(path = %path.display(), "no definitions (empty file)");
            }
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "skipping file");
            }
        }
    }

    if candidates == 0 {
        return Err(Error::NoSourceFiles {
            root: root.to_path_buf(),
            language,
        });
    }

    info!(files_indexed = files.len(), language = %language, "indexed project");
    Ok(files)
}

fn matches_language(path: &Path, language: Language) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(Language::from_extension)
        == Some(language)
}
