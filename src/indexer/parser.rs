//! Tree-sitter parser wrapper and per-file source unit

use super::types::Language;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser as TsParser, Tree};

/// Resolve the grammar binding for a language
pub(crate) fn ts_language(language: Language) -> tree_sitter::Language {
    match language {
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
    }
}

/// Grammar-backed parser; one instance is constructed per run and passed
/// into the walker and extractor
pub struct Parser {
    ts_parser: TsParser,
}

impl Parser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Parser {
            ts_parser: TsParser::new(),
        }
    }

    /// Parse source bytes for a given language
    pub fn parse(&mut self, source: &[u8], language: Language, path: &Path) -> Result<Tree> {
        self.ts_parser
            .set_language(&ts_language(language))
            .map_err(|e| Error::Query(e.to_string()))?;

        self.ts_parser.parse(source, None).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// One parsed file: path, raw bytes, and the parse tree. Built per file,
/// dropped after extraction; the tree is never retained across files.
#[derive(Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: Vec<u8>,
    pub tree: Tree,
    pub language: Language,
}

impl SourceUnit {
    /// Read and parse a file. A zero-byte file is reported as
    /// `Error::EmptyFile` so the walker can record "no definitions"
    /// instead of parsing nothing.
    pub fn read(path: &Path, language: Language, parser: &mut Parser) -> Result<Self> {
        let source = std::fs::read(path).map_err(|e| Error::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        if source.is_empty() {
            return Err(Error::EmptyFile(path.to_path_buf()));
        }

        let tree = parser.parse(&source, language, path)?;

        Ok(SourceUnit {
            path: path.to_path_buf(),
            source,
            tree,
            language,
        })
    }

    /// Build a unit from an in-memory source string
    #[cfg(test)]
    pub fn from_source(source: &str, language: Language, parser: &mut Parser) -> Result<Self> {
        let bytes = source.as_bytes().to_vec();
        let tree = parser.parse(&bytes, language, Path::new("<memory>"))?;
        Ok(SourceUnit {
            path: PathBuf::from("<memory>"),
            source: bytes,
            tree,
            language,
        })
    }

    /// Exact text of a node: the slice of the original source bytes between
    /// its start and end offsets. No normalization happens here.
    pub fn text(&self, node: Node) -> String {
        String::from_utf8_lossy(&self.source[node.start_byte()..node.end_byte()]).into_owned()
    }

    /// Text of an optional node; a missing node yields an empty string
    pub fn opt_text(&self, node: Option<Node>) -> String {
        node.map(|n| self.text(n)).unwrap_or_default()
    }
}
