//! Structural indexer: parse, extract, render, walk.
//!
//! Uses tree-sitter for concrete-syntax parsing; declarative queries select
//! declarations, the renderer reassembles normalized signatures, and the
//! walker drives the per-file pipeline over a project tree.

mod extractor;
mod parser;
mod queries;
mod render;
mod types;
mod walker;

pub use extractor::{index_file, QueryEngine};
pub use parser::{Parser, SourceUnit};
pub use render::{render_file, render_project, BODY_PLACEHOLDER, SEPARATOR};
pub use types::{
    Callable, EntityKind, EntityRecord, FieldRecord, FileIndex, Language, MemberRecord,
};
pub use walker::walk_project;
