//! Signature rendering: turns extracted records into the normalized text
//! blocks that make up the index artifact.
//!
//! Signature lines are reassembled from fragments and collapsed to single
//! spaces; documentation is stripped of its quote or comment delimiters.
//! Missing optional pieces render as empty strings — the only sentinel is
//! the body placeholder.

use super::types::{Callable, EntityRecord, FieldRecord, FileIndex, Language, MemberRecord};

/// Marker standing in for an intentionally omitted method body
pub const BODY_PLACEHOLDER: &str = "...";

/// Rule separating consecutive file blocks in the aggregate artifact
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

const BANNER: &str =
    "================================================================================";

/// Render the aggregate artifact: file blocks joined by exactly one
/// separator line between consecutive blocks, none leading or trailing
pub fn render_project(files: &[FileIndex]) -> String {
    files
        .iter()
        .map(render_file)
        .collect::<Vec<_>>()
        .join(&format!("{}\n", SEPARATOR))
}

/// Render one file block: banner, path, banner, imports, functions, types
pub fn render_file(index: &FileIndex) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&index.path);
    out.push('\n');
    out.push_str(BANNER);
    out.push('\n');

    let mut prelude: Vec<&str> = Vec::new();
    if let Some(pkg) = &index.package {
        prelude.push(pkg);
    }
    prelude.extend(index.imports.iter().map(String::as_str));
    if !prelude.is_empty() {
        for line in prelude {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    for function in &index.functions {
        out.push_str(&callable_signature(function, index.language, false));
        out.push('\n');
        out.push_str("  ");
        out.push_str(&clean_doc(&function.doc));
        out.push('\n');
        out.push('\n');
    }

    for entity in &index.entities {
        render_entity(&mut out, entity, index.language);
    }

    out
}

fn render_entity(out: &mut String, entity: &EntityRecord, language: Language) {
    out.push_str(&entity_signature(entity, language));
    out.push('\n');
    out.push_str(&clean_doc(&entity.doc));
    out.push('\n');

    for member in &entity.members {
        match member {
            MemberRecord::Method(c) => {
                out.push_str("  ");
                out.push_str(&callable_signature(c, language, false));
                out.push('\n');
                out.push_str("  ");
                out.push_str(&clean_doc(&c.doc));
                out.push('\n');
                out.push_str("    ");
                out.push_str(BODY_PLACEHOLDER);
                out.push('\n');
            }
            MemberRecord::Constructor(c) => {
                out.push_str("  ");
                out.push_str(&callable_signature(c, language, true));
                out.push('\n');
                out.push_str("  ");
                out.push_str(&clean_doc(&c.doc));
                out.push('\n');
                out.push_str("    ");
                out.push_str(BODY_PLACEHOLDER);
                out.push('\n');
            }
            MemberRecord::Field(f) => {
                out.push_str("  ");
                out.push_str(&field_signature(f));
                out.push('\n');
            }
        }
    }

    out.push('\n');
}

/// Entity header, e.g. `class Greeter(Base):` or
/// `public class Service<T> extends Base implements Runnable:`
fn entity_signature(entity: &EntityRecord, language: Language) -> String {
    let line = match language {
        Language::Python => format!(
            "{} {}{}",
            entity.kind,
            entity.name,
            entity.extends.as_deref().unwrap_or("")
        ),
        Language::Java => {
            let generics = angle_generics(&entity.generics);
            let extends = entity
                .extends
                .as_deref()
                .map(|x| format!("extends {}", x))
                .unwrap_or_default();
            let implements = if entity.implements.is_empty() {
                String::new()
            } else {
                format!("implements {}", entity.implements.join(", "))
            };
            format!(
                "{} {} {}{} {} {}",
                entity.modifiers.join(" "),
                entity.kind,
                entity.name,
                generics,
                extends,
                implements
            )
        }
    };
    format!("{}:", collapse_spaces(&line))
}

/// Callable line: `def name(params)[ -> ret]` for Python, the
/// reconstructed `modifiers <generics> ret name(params) throws E` for Java
fn callable_signature(c: &Callable, language: Language, constructor: bool) -> String {
    let line = match language {
        Language::Python => {
            let ret = c
                .return_type
                .as_deref()
                .map(|r| format!(" -> {}", r))
                .unwrap_or_default();
            format!("def {}{}{}", c.name, c.params, ret)
        }
        Language::Java => {
            let throws = if c.throws.is_empty() {
                String::new()
            } else {
                format!("throws {}", c.throws.join(", "))
            };
            let ret = if constructor {
                String::new()
            } else {
                c.return_type.clone().unwrap_or_default()
            };
            format!(
                "{} {} {} {}{} {}",
                c.modifiers.join(" "),
                angle_generics(&c.generics),
                ret,
                c.name,
                c.params,
                throws
            )
        }
    };
    format!("{}:", collapse_spaces(&line))
}

/// Field line: `modifiers type name`
fn field_signature(f: &FieldRecord) -> String {
    collapse_spaces(&format!(
        "{} {} {}",
        f.modifiers.join(" "),
        f.type_name,
        f.name
    ))
}

fn angle_generics(generics: &[String]) -> String {
    if generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", generics.join(", "))
    }
}

/// Collapse every run of two or more spaces to one and trim the ends
fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            prev_space = false;
            out.push(ch);
        }
    }
    out.trim().to_string()
}

/// Normalize documentation to a single line: strip string-quote or comment
/// delimiters, drop per-line comment decoration, join on single spaces.
/// Empty input stays empty.
fn clean_doc(raw: &str) -> String {
    let mut s = raw.trim();

    // Python string literal prefixes (r"...", f"...", rb"...")
    while let Some(rest) = s
        .strip_prefix(|c: char| matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F'))
    {
        if rest.starts_with('"') || rest.starts_with('\'') {
            s = rest;
        } else {
            break;
        }
    }
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if s.len() >= quote.len() * 2 && s.starts_with(quote) && s.ends_with(quote) {
            s = &s[quote.len()..s.len() - quote.len()];
            break;
        }
    }

    // Comment delimiters (Javadoc / block / line comments)
    s = s.strip_prefix("/**").or_else(|| s.strip_prefix("/*")).unwrap_or(s);
    s = s.strip_suffix("*/").unwrap_or(s);

    let lines: Vec<String> = s
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches("//")
                .trim_start_matches('*')
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect();

    collapse_spaces(&lines.join(" "))
}
