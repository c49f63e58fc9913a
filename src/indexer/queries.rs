//! Declarative tree-sitter query patterns, one battery per language.
//!
//! The extractor compiles these once per run. Capture names are the
//! contract between pattern and extractor: a capture absent from a match
//! degrades to an empty value, never an error.

/// Top-level Python imports; both grammatical forms share one capture so
/// they land in a single source-ordered list
pub const PY_IMPORTS: &str = r#"
(module
  [
    (import_statement)
    (import_from_statement)
  ] @import)
"#;

/// Module-level Python functions: name, parameter list, optional return
/// annotation, body (the body's leading string is the docstring)
pub const PY_MODULE_FUNCTIONS: &str = r#"
(module
  (function_definition
    name: (identifier)? @name
    parameters: (parameters) @params
    return_type: (type)? @ret
    body: (block) @body) @function)
"#;

/// Top-level Python classes: name, optional superclass argument list, body
pub const PY_CLASSES: &str = r#"
(module
  (class_definition
    name: (identifier)? @name
    superclasses: (argument_list)? @bases
    body: (block) @body) @class)
"#;

/// Functions nested in a class body; the extractor keeps only direct
/// children of the body it queries
pub const PY_MEMBERS: &str = r#"
(function_definition
  name: (identifier)? @name
  parameters: (parameters) @params
  return_type: (type)? @ret
  body: (block) @body) @function
"#;

/// Java package declaration, captured as the whole statement
pub const JAVA_PACKAGE: &str = r#"
(program (package_declaration) @package)
"#;

/// Java import statements, captured verbatim
pub const JAVA_IMPORTS: &str = r#"
(program (import_declaration) @import)
"#;

/// Top-level Java type declarations; details (modifiers, generics,
/// heritage, body) are resolved through node fields on the captured node
pub const JAVA_TYPES: &str = r#"
(program
  [
    (class_declaration)
    (interface_declaration)
    (enum_declaration)
    (record_declaration)
  ] @type)
"#;

/// Members of a Java type body; dispatched on node kind by the extractor
pub const JAVA_MEMBERS: &str = r#"
[
  (method_declaration)
  (constructor_declaration)
  (field_declaration)
  (constant_declaration)
] @member
"#;
