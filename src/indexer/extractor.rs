//! Structural extraction: runs the query battery over a parse tree and
//! builds normalized records.
//!
//! Queries select declarations; fragments (modifiers, heritage clauses,
//! throws lists) are resolved through node fields on the captured nodes.
//! Every extracted text is the exact byte range of the node; normalization
//! happens only in the renderer.

use super::parser::{ts_language, Parser, SourceUnit};
use super::queries;
use super::types::{Callable, EntityKind, EntityRecord, FieldRecord, FileIndex, Language, MemberRecord};
use crate::error::{Error, Result};
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor, QueryMatch};

/// Compiled query battery for one language. Constructed once per run and
/// passed into the walker alongside the parser.
pub struct QueryEngine {
    language: Language,
    imports: Query,
    functions: Option<Query>,
    types: Query,
    members: Query,
    package: Option<Query>,
}

impl QueryEngine {
    /// Compile the query battery for a language. A malformed pattern is a
    /// programmer error and surfaces here, before any file is touched.
    pub fn new(language: Language) -> Result<Self> {
        let grammar = ts_language(language);
        let compile =
            |src: &str| Query::new(&grammar, src).map_err(|e| Error::Query(e.to_string()));

        match language {
            Language::Python => Ok(QueryEngine {
                language,
                imports: compile(queries::PY_IMPORTS)?,
                functions: Some(compile(queries::PY_MODULE_FUNCTIONS)?),
                types: compile(queries::PY_CLASSES)?,
                members: compile(queries::PY_MEMBERS)?,
                package: None,
            }),
            Language::Java => Ok(QueryEngine {
                language,
                imports: compile(queries::JAVA_IMPORTS)?,
                functions: None,
                types: compile(queries::JAVA_TYPES)?,
                members: compile(queries::JAVA_MEMBERS)?,
                package: Some(compile(queries::JAVA_PACKAGE)?),
            }),
        }
    }

    /// Extract the structural summary of one parsed unit. Extraction is
    /// total: malformed pieces degrade to empty fields, never errors.
    pub fn extract(&self, unit: &SourceUnit) -> FileIndex {
        let root = unit.tree.root_node();

        let imports = query_nodes(&self.imports, root, unit, "import")
            .into_iter()
            .map(|n| unit.text(n))
            .collect();

        let package = self
            .package
            .as_ref()
            .and_then(|q| query_nodes(q, root, unit, "package").into_iter().next())
            .map(|n| unit.text(n));

        let functions = match &self.functions {
            Some(q) => self.callables(unit, q, root, None),
            None => Vec::new(),
        };

        let entities = match self.language {
            Language::Python => self.python_entities(unit, root),
            Language::Java => self.java_entities(unit, root),
        };

        FileIndex {
            path: display_path(&unit.path),
            package,
            imports,
            functions,
            entities,
            language: self.language,
        }
    }

    /// Run a callable-shaped query over a scope. `direct_child_of`
    /// restricts matches to immediate children of the given body node
    /// (used for members; a bare pattern matches the whole subtree).
    fn callables(
        &self,
        unit: &SourceUnit,
        query: &Query,
        scope: Node,
        direct_child_of: Option<Node>,
    ) -> Vec<Callable> {
        let mut found: Vec<(usize, Callable)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, scope, unit.source.as_slice());

        while let Some(m) = matches.next() {
            let Some(fn_node) = capture_node(query, m, "function") else {
                continue;
            };
            if let Some(body) = direct_child_of {
                if fn_node.parent().map(|p| p.id()) != Some(body.id()) {
                    continue;
                }
            }

            let body = capture_node(query, m, "body");
            found.push((
                fn_node.start_byte(),
                Callable {
                    name: unit.opt_text(capture_node(query, m, "name")),
                    modifiers: Vec::new(),
                    generics: Vec::new(),
                    params: unit.opt_text(capture_node(query, m, "params")),
                    return_type: capture_node(query, m, "ret").map(|n| unit.text(n)),
                    throws: Vec::new(),
                    doc: body.map(|b| docstring_of(unit, b)).unwrap_or_default(),
                },
            ));
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, c)| c).collect()
    }

    fn python_entities(&self, unit: &SourceUnit, root: Node) -> Vec<EntityRecord> {
        let mut found: Vec<(usize, EntityRecord)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.types, root, unit.source.as_slice());

        while let Some(m) = matches.next() {
            let Some(class_node) = capture_node(&self.types, m, "class") else {
                continue;
            };

            let name = unit.opt_text(capture_node(&self.types, m, "name"));
            if name.is_empty() {
                tracing::debug!(path = %unit.path.display(), "emitting class with unresolved name");
            }

            let body = capture_node(&self.types, m, "body");
            let members = body
                .map(|b| {
                    self.callables(unit, &self.members, b, Some(b))
                        .into_iter()
                        .map(MemberRecord::Method)
                        .collect()
                })
                .unwrap_or_default();

            found.push((
                class_node.start_byte(),
                EntityRecord {
                    kind: EntityKind::Class,
                    name,
                    modifiers: Vec::new(),
                    generics: Vec::new(),
                    extends: capture_node(&self.types, m, "bases").map(|n| unit.text(n)),
                    implements: Vec::new(),
                    doc: body.map(|b| docstring_of(unit, b)).unwrap_or_default(),
                    members,
                },
            ));
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, e)| e).collect()
    }

    fn java_entities(&self, unit: &SourceUnit, root: Node) -> Vec<EntityRecord> {
        query_nodes(&self.types, root, unit, "type")
            .into_iter()
            .map(|n| self.java_entity(unit, n))
            .collect()
    }

    fn java_entity(&self, unit: &SourceUnit, node: Node) -> EntityRecord {
        let kind = match node.kind() {
            "interface_declaration" => EntityKind::Interface,
            "enum_declaration" => EntityKind::Enum,
            "record_declaration" => EntityKind::Record,
            _ => EntityKind::Class,
        };

        let name = unit.opt_text(node.child_by_field_name("name"));
        if name.is_empty() {
            tracing::debug!(path = %unit.path.display(), kind = %kind, "emitting type with unresolved name");
        }

        let (extends, implements) = heritage_of(unit, node);
        let members = node
            .child_by_field_name("body")
            .map(|b| self.java_members(unit, b))
            .unwrap_or_default();

        EntityRecord {
            kind,
            name,
            modifiers: modifiers_of(unit, node),
            generics: type_parameters_of(unit, node),
            extends,
            implements,
            doc: leading_comment_doc(unit, node),
            members,
        }
    }

    fn java_members(&self, unit: &SourceUnit, body: Node) -> Vec<MemberRecord> {
        let mut members = Vec::new();

        for node in query_nodes(&self.members, body, unit, "member") {
            if !is_direct_member(node, body) {
                continue;
            }

            match node.kind() {
                "method_declaration" => members.push(MemberRecord::Method(Callable {
                    name: unit.opt_text(node.child_by_field_name("name")),
                    modifiers: modifiers_of(unit, node),
                    generics: type_parameters_of(unit, node),
                    params: unit.opt_text(node.child_by_field_name("parameters")),
                    return_type: node.child_by_field_name("type").map(|n| unit.text(n)),
                    throws: throws_of(unit, node),
                    doc: leading_comment_doc(unit, node),
                })),
                "constructor_declaration" => members.push(MemberRecord::Constructor(Callable {
                    name: unit.opt_text(node.child_by_field_name("name")),
                    modifiers: modifiers_of(unit, node),
                    generics: Vec::new(),
                    params: unit.opt_text(node.child_by_field_name("parameters")),
                    return_type: None,
                    throws: throws_of(unit, node),
                    doc: leading_comment_doc(unit, node),
                })),
                "field_declaration" | "constant_declaration" => {
                    let modifiers = modifiers_of(unit, node);
                    let type_name = unit.opt_text(node.child_by_field_name("type"));
                    // One record per declarator: `int a, b;` yields two fields
                    let mut cursor = node.walk();
                    for child in node.children(&mut cursor) {
                        if child.kind() == "variable_declarator" {
                            members.push(MemberRecord::Field(FieldRecord {
                                modifiers: modifiers.clone(),
                                type_name: type_name.clone(),
                                name: unit.opt_text(child.child_by_field_name("name")),
                            }));
                        }
                    }
                }
                _ => {}
            }
        }

        members
    }
}

/// Parse one file and extract its structural summary
pub fn index_file(
    path: &Path,
    language: Language,
    parser: &mut Parser,
    engine: &QueryEngine,
) -> Result<FileIndex> {
    let unit = SourceUnit::read(path, language, parser)?;
    Ok(engine.extract(&unit))
}

/// Collect the nodes bound to one capture name, in source order
fn query_nodes<'t>(
    query: &Query,
    scope: Node<'t>,
    unit: &'t SourceUnit,
    capture: &str,
) -> Vec<Node<'t>> {
    let Some(index) = query.capture_index_for_name(capture) else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, scope, unit.source.as_slice());
    while let Some(m) = matches.next() {
        for c in m.captures {
            if c.index == index {
                nodes.push(c.node);
            }
        }
    }

    nodes.sort_by_key(|n| n.start_byte());
    nodes
}

/// First node a match binds to the given capture name, if any
fn capture_node<'t>(query: &Query, m: &QueryMatch<'_, 't>, capture: &str) -> Option<Node<'t>> {
    let index = query.capture_index_for_name(capture)?;
    m.captures.iter().find(|c| c.index == index).map(|c| c.node)
}

/// Leading docstring of a Python block: the string expression in first
/// statement position, raw quotes included
fn docstring_of(unit: &SourceUnit, body: Node) -> String {
    let Some(first) = body.named_child(0) else {
        return String::new();
    };
    if first.kind() != "expression_statement" {
        return String::new();
    }
    match first.named_child(0) {
        Some(s) if s.kind() == "string" => unit.text(s),
        _ => String::new(),
    }
}

fn is_comment(kind: &str) -> bool {
    matches!(kind, "comment" | "line_comment" | "block_comment")
}

/// Documentation from the run of comment siblings immediately preceding a
/// declaration (Javadoc or consecutive line comments)
fn leading_comment_doc(unit: &SourceUnit, node: Node) -> String {
    let mut comments: Vec<String> = Vec::new();
    let mut current = node.prev_sibling();

    while let Some(sibling) = current {
        if !is_comment(sibling.kind()) {
            break;
        }
        comments.insert(0, unit.text(sibling).trim().to_string());

        match sibling.prev_sibling() {
            Some(prev)
                if is_comment(prev.kind())
                    && sibling
                        .start_position()
                        .row
                        .saturating_sub(prev.end_position().row)
                        <= 1 =>
            {
                current = Some(prev);
            }
            _ => break,
        }
    }

    comments.join("\n")
}

/// Modifier keywords and annotations of a Java declaration, in source order
fn modifiers_of(unit: &SourceUnit, node: Node) -> Vec<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "modifiers" {
            let mut mods = Vec::new();
            let mut mc = child.walk();
            for m in child.children(&mut mc) {
                mods.push(unit.text(m));
            }
            return mods;
        }
    }
    Vec::new()
}

/// Generic type parameters of a Java declaration (`<T, U>` pieces)
fn type_parameters_of(unit: &SourceUnit, node: Node) -> Vec<String> {
    let Some(tp) = node.child_by_field_name("type_parameters") else {
        return Vec::new();
    };
    let mut params = Vec::new();
    let mut cursor = tp.walk();
    for child in tp.named_children(&mut cursor) {
        if child.kind() == "type_parameter" {
            params.push(unit.text(child));
        }
    }
    params
}

/// Extends / implements clauses of a Java type declaration. An interface's
/// `extends A, B` list is joined into the extends slot.
fn heritage_of(unit: &SourceUnit, node: Node) -> (Option<String>, Vec<String>) {
    let mut extends = None;
    let mut implements = Vec::new();

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "superclass" => {
                extends = child.named_child(0).map(|t| unit.text(t));
            }
            "extends_interfaces" => {
                if let Some(list) = child.named_child(0) {
                    let mut lc = list.walk();
                    let types: Vec<String> =
                        list.named_children(&mut lc).map(|t| unit.text(t)).collect();
                    if !types.is_empty() {
                        extends = Some(types.join(", "));
                    }
                }
            }
            "super_interfaces" => {
                if let Some(list) = child.named_child(0) {
                    let mut lc = list.walk();
                    for t in list.named_children(&mut lc) {
                        implements.push(unit.text(t));
                    }
                }
            }
            _ => {}
        }
    }

    (extends, implements)
}

/// Throws clause of a Java method or constructor
fn throws_of(unit: &SourceUnit, node: Node) -> Vec<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "throws" {
            let mut exceptions = Vec::new();
            let mut tc = child.walk();
            for t in child.named_children(&mut tc) {
                exceptions.push(unit.text(t));
            }
            return exceptions;
        }
    }
    Vec::new()
}

/// Direct member of a type body; enum methods sit one level down inside
/// the enum_body_declarations node
fn is_direct_member(node: Node, body: Node) -> bool {
    match node.parent() {
        Some(p) if p.id() == body.id() => true,
        Some(p) if p.kind() == "enum_body_declarations" => {
            p.parent().map(|gp| gp.id() == body.id()).unwrap_or(false)
        }
        _ => false,
    }
}

/// Path relative to the current working directory, forward-slash form
fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| {
            path.canonicalize()
                .ok()
                .and_then(|abs| abs.strip_prefix(&cwd).ok().map(|r| r.to_path_buf()))
        })
        .unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}
