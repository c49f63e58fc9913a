//! Error taxonomy for the indexing pipeline.
//!
//! Per-file failures (`FileAccess`, `Parse`, `EmptyFile`) are caught by the
//! walker, logged, and converted into skips. Only `NoSourceFiles` aborts a
//! walk.

use crate::indexer::Language;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty file: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("failed to parse {}", .path.display())]
    Parse { path: PathBuf },

    #[error("invalid query pattern: {0}")]
    Query(String),

    #[error("no {language} source files found under {}", .root.display())]
    NoSourceFiles { root: PathBuf, language: Language },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("git command failed: {0}")]
    Git(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
