//! Types for the indexer module

use serde::{Deserialize, Serialize};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Resolve a language from its CLI name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "python" | "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Get the language name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kinds of type declarations the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Interface,
    Enum,
    Record,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Interface => "interface",
            EntityKind::Enum => "enum",
            EntityKind::Record => "record",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural summary of one source file.
///
/// Rebuilt in full on every run; nothing here survives across files or runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileIndex {
    /// Path relative to the current working directory, forward-slash form
    pub path: String,
    /// Package declaration, verbatim (Java)
    pub package: Option<String>,
    /// Import statements, verbatim, in source order; both grammatical
    /// forms land in this one list
    pub imports: Vec<String>,
    /// Module-level functions (Python)
    pub functions: Vec<Callable>,
    /// Top-level type declarations
    pub entities: Vec<EntityRecord>,
    /// Source language
    pub language: Language,
}

/// One top-level type declaration and its members.
///
/// A missing or unlocatable body yields an empty member list, never an
/// error. The name may be empty when the parse was too broken to bind one;
/// such entities are still emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub name: String,
    pub modifiers: Vec<String>,
    pub generics: Vec<String>,
    /// Extends clause: the raw superclass argument list for Python, the
    /// named supertype(s) for Java
    pub extends: Option<String>,
    pub implements: Vec<String>,
    /// Documentation text, empty string when absent
    pub doc: String,
    pub members: Vec<MemberRecord>,
}

/// A member of a type body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "lowercase")]
pub enum MemberRecord {
    Method(Callable),
    Constructor(Callable),
    Field(FieldRecord),
}

/// A function, method, or constructor signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callable {
    pub name: String,
    pub modifiers: Vec<String>,
    pub generics: Vec<String>,
    /// Parameter list, verbatim byte-range text, parentheses included
    pub params: String,
    pub return_type: Option<String>,
    pub throws: Vec<String>,
    /// Documentation text, empty string when absent
    pub doc: String,
}

/// A field declaration; one record per declarator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    pub modifiers: Vec<String>,
    pub type_name: String,
    pub name: String,
}
