//! arbor - structural source-code indexer for LLM-assisted review

use anyhow::{bail, Context};
use arbor::cli::{Cli, Commands};
use arbor::error::Error;
use arbor::indexer::{self, Language};
use arbor::{git, prompt};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("arbor=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            path,
            lang,
            json,
            output,
        } => run_index(&path, &lang, json, output),

        Commands::Diff { repo, staged } => {
            match git::diff(Path::new(&repo), staged)? {
                Some(diff) => print!("{}", diff),
                None => println!("No changes detected."),
            }
            Ok(())
        }

        Commands::Prompt { repo, lang, kind } => run_prompt(&repo, &lang, &kind),
    }
}

fn run_index(path: &str, lang: &str, json: bool, output: Option<String>) -> anyhow::Result<()> {
    let language = resolve_language(lang)?;
    let root = PathBuf::from(path);

    let mut parser = indexer::Parser::new();
    let engine = indexer::QueryEngine::new(language)?;
    let files = indexer::walk_project(&root, language, &mut parser, &engine)?;

    let artifact = if json {
        let mut lines = Vec::with_capacity(files.len());
        for file in &files {
            lines.push(serde_json::to_string(file)?);
        }
        format!("{}\n", lines.join("\n"))
    } else {
        indexer::render_project(&files)
    };

    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_artifact_path(&root, json));
    std::fs::write(&out_path, &artifact)
        .with_context(|| format!("cannot write {}", out_path.display()))?;

    println!(
        "{}",
        serde_json::json!({
            "success": true,
            "files_indexed": files.len(),
            "artifact": out_path.display().to_string(),
        })
    );
    Ok(())
}

fn run_prompt(repo: &str, lang: &str, kind: &str) -> anyhow::Result<()> {
    let language = resolve_language(lang)?;
    let repo_path = PathBuf::from(repo);

    let Some(diff) = git::diff(&repo_path, false)? else {
        println!("No changes detected.");
        return Ok(());
    };

    let index_text = match build_index(&repo_path, language) {
        Ok(files) => Some(indexer::render_project(&files)),
        Err(Error::NoSourceFiles { .. }) => {
            warn!(language = %language, "no source files to index; composing prompt from the diff alone");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let text = match kind {
        "review" => prompt::review_prompt(index_text.as_deref(), &diff),
        "commit" => prompt::commit_prompt(index_text.as_deref(), &diff),
        other => bail!("unknown prompt kind: {}", other),
    };

    print!("{}", text);
    Ok(())
}

fn build_index(root: &Path, language: Language) -> arbor::Result<Vec<indexer::FileIndex>> {
    let mut parser = indexer::Parser::new();
    let engine = indexer::QueryEngine::new(language)?;
    indexer::walk_project(root, language, &mut parser, &engine)
}

fn resolve_language(name: &str) -> anyhow::Result<Language> {
    Language::from_name(name).ok_or_else(|| Error::UnsupportedLanguage(name.to_string()).into())
}

/// Artifact lands in the current working directory, named after the project
fn default_artifact_path(root: &Path, json: bool) -> PathBuf {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let name = if resolved.is_file() {
        resolved.file_stem().map(|n| n.to_string_lossy().into_owned())
    } else {
        resolved.file_name().map(|n| n.to_string_lossy().into_owned())
    };
    let name = name.unwrap_or_else(|| "project".to_string());
    let ext = if json { "json" } else { "txt" };
    PathBuf::from(format!("{}-index.{}", name, ext))
}
