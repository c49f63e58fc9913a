//! Integration tests for the arbor indexing pipeline
//!
//! Tests the end-to-end functionality of:
//! - Project walking with the directory denylist
//! - Per-file parse, extract, render
//! - Aggregate artifact invariants (separators, ordering, idempotence)

use arbor::error::Error;
use arbor::indexer::{
    render_project, walk_project, Language, Parser, QueryEngine, BODY_PLACEHOLDER, SEPARATOR,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a file under the test root, creating parent directories
fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn index_root(root: &Path, language: Language) -> arbor::Result<Vec<arbor::FileIndex>> {
    let mut parser = Parser::new();
    let engine = QueryEngine::new(language).unwrap();
    walk_project(root, language, &mut parser, &engine)
}

// ============================================================================
// Walker Tests
// ============================================================================

mod walker_tests {
    use super::*;

    #[test]
    fn test_walk_indexes_files_in_path_order() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "b.py", "import sys\n");
        write_file(temp.path(), "a.py", "import os\n");

        let files = index_root(temp.path(), Language::Python).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].path.ends_with("a.py"));
        assert!(files[1].path.ends_with("b.py"));
    }

    #[test]
    fn test_denylisted_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "app.py", "import os\n");
        write_file(temp.path(), "__pycache__/cached.py", "import sys\n");
        write_file(temp.path(), ".git/hooks/hook.py", "import hook\n");

        let files = index_root(temp.path(), Language::Python).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("app.py"));

        let artifact = render_project(&files);
        assert!(!artifact.contains("cached.py"));
        assert!(!artifact.contains("import hook"));
    }

    #[test]
    fn test_empty_file_is_skipped_without_error() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "app.py", "import os\n");
        write_file(temp.path(), "empty.py", "");

        let files = index_root(temp.path(), Language::Python).unwrap();
        assert_eq!(files.len(), 1);
        assert!(!render_project(&files).contains("empty.py"));
    }

    #[test]
    fn test_no_source_files_aborts_the_walk() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "notes.txt", "not code\n");

        let err = index_root(temp.path(), Language::Python).unwrap_err();
        assert!(matches!(err, Error::NoSourceFiles { .. }));
    }

    #[test]
    fn test_other_language_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "App.java", "public class App {}\n");
        write_file(temp.path(), "app.py", "import os\n");

        let files = index_root(temp.path(), Language::Java).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("App.java"));
    }

    #[test]
    fn test_single_file_root() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "solo.py", "def run():\n    pass\n");

        let files = index_root(&temp.path().join("solo.py"), Language::Python).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].functions.len(), 1);
    }
}

// ============================================================================
// Artifact Tests
// ============================================================================

mod artifact_tests {
    use super::*;

    #[test]
    fn test_scenario_import_function_no_class() {
        let temp = TempDir::new().unwrap();
        write_file(
            temp.path(),
            "app.py",
            "import os\n\ndef greet(name):\n    \"\"\"say hi\"\"\"\n",
        );

        let files = index_root(temp.path(), Language::Python).unwrap();
        let artifact = render_project(&files);

        // Banner, path, banner, import, blank, def line, doc line, blank
        let lines: Vec<&str> = artifact.lines().collect();
        let banner = "=".repeat(80);
        assert_eq!(lines[0], banner);
        assert!(lines[1].ends_with("app.py"));
        assert_eq!(lines[2], banner);
        assert_eq!(lines[3], "import os");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "def greet(name):");
        assert_eq!(lines[6], "  say hi");
        assert!(!artifact.contains("class"));
    }

    #[test]
    fn test_scenario_method_without_doc_gets_placeholder() {
        let temp = TempDir::new().unwrap();
        write_file(
            temp.path(),
            "app.py",
            "class Widget:\n    def method_name(self):\n        pass\n",
        );

        let files = index_root(temp.path(), Language::Python).unwrap();
        let artifact = render_project(&files);

        assert!(artifact.contains("class Widget:\n"));
        assert!(artifact.contains(&format!(
            "  def method_name(self):\n  \n    {}\n",
            BODY_PLACEHOLDER
        )));
        assert!(!artifact.contains("None"));
    }

    #[test]
    fn test_separator_between_blocks_only() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "a.py", "import os\n");
        write_file(temp.path(), "b.py", "import sys\n");
        write_file(temp.path(), "c.py", "import json\n");

        let files = index_root(temp.path(), Language::Python).unwrap();
        let artifact = render_project(&files);

        let separators = artifact.lines().filter(|l| *l == SEPARATOR).count();
        assert_eq!(separators, 2);
        assert!(!artifact.starts_with(SEPARATOR));
        let last_line = artifact.lines().last().unwrap();
        assert_ne!(last_line, SEPARATOR);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let temp = TempDir::new().unwrap();
        write_file(
            temp.path(),
            "app.py",
            "import os\n\nclass A(Base):\n    \"\"\"doc\"\"\"\n    def m(self):\n        pass\n",
        );

        let first = render_project(&index_root(temp.path(), Language::Python).unwrap());
        let second = render_project(&index_root(temp.path(), Language::Python).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_java_end_to_end() {
        let temp = TempDir::new().unwrap();
        write_file(
            temp.path(),
            "src/Service.java",
            r#"package com.example;

import java.io.IOException;
import java.util.List;

/** Fetches things. */
public class Service extends Base implements Runnable {
    private final int retries;

    public Service(int retries) {
        this.retries = retries;
    }

    /** Runs one fetch. */
    public List<String> fetch(String url) throws IOException {
        return List.of(url);
    }
}
"#,
        );

        let files = index_root(temp.path(), Language::Java).unwrap();
        assert_eq!(files.len(), 1);
        let artifact = render_project(&files);

        assert!(artifact.contains("package com.example;\n"));
        assert!(artifact.contains("import java.io.IOException;\nimport java.util.List;\n\n"));
        assert!(artifact.contains("public class Service extends Base implements Runnable:\n"));
        assert!(artifact.contains("Fetches things.\n"));
        assert!(artifact.contains("  private final int retries\n"));
        assert!(artifact.contains("  public Service(int retries):\n"));
        assert!(artifact.contains("  public List<String> fetch(String url) throws IOException:\n"));
        assert!(artifact.contains("  Runs one fetch.\n"));
        assert!(artifact.contains(BODY_PLACEHOLDER));
    }

    #[test]
    fn test_json_records_are_valid() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "app.py", "def f():\n    pass\n");

        let files = index_root(temp.path(), Language::Python).unwrap();
        for file in &files {
            let line = serde_json::to_string(file).unwrap();
            let value: serde_json::Value = serde_json::from_str(&line).unwrap();
            assert_eq!(value["language"], "python");
            assert!(value["path"].as_str().unwrap().ends_with("app.py"));
        }
    }
}

// ============================================================================
// Prompt Composition Tests
// ============================================================================

mod prompt_tests {
    use super::*;
    use arbor::prompt;

    #[test]
    fn test_prompt_embeds_rendered_index_and_diff() {
        let temp = TempDir::new().unwrap();
        write_file(
            temp.path(),
            "app.py",
            "def greet(name):\n    \"\"\"say hi\"\"\"\n",
        );

        let files = index_root(temp.path(), Language::Python).unwrap();
        let index_text = render_project(&files);
        let diff = "diff --git a/app.py b/app.py\n+def greet(name):\n";

        let text = prompt::review_prompt(Some(&index_text), diff);
        assert!(text.contains("def greet(name):"));
        assert!(text.contains("diff --git a/app.py"));
    }
}
