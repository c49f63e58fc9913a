//! arbor - structural source-code indexer for LLM-assisted review
//!
//! Parses a project's source files into concrete syntax trees, extracts a
//! normalized structural summary (imports, functions, types, members,
//! signatures, docs), and renders one compact index artifact suitable for
//! embedding in a model prompt next to a git diff.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod indexer;
pub mod llm;
pub mod prompt;

// Re-export commonly used types
pub use error::{Error, Result};
pub use indexer::{FileIndex, Language};
