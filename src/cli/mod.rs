//! CLI module for arbor
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Structural source-code indexer for LLM-assisted review")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    // ========================================================================
    // Index Commands
    // ========================================================================

    /// Build a structural index of a project tree
    Index {
        /// Path to the project root (or a single source file)
        path: String,
        /// Source language: python or java
        #[arg(short, long, default_value = "python")]
        lang: String,
        /// Emit one JSON object per file instead of the rendered text
        #[arg(long)]
        json: bool,
        /// Output file (default: <project-name>-index.txt in the current directory)
        #[arg(short, long)]
        output: Option<String>,
    },

    // ========================================================================
    // Review Commands
    // ========================================================================

    /// Print the pending diff of a repository
    Diff {
        /// Path to the git repository
        #[arg(long, default_value = ".")]
        repo: String,
        /// Diff only staged changes
        #[arg(long)]
        staged: bool,
    },

    /// Compose a model prompt from the structural index and the pending diff
    Prompt {
        /// Path to the git repository
        #[arg(long, default_value = ".")]
        repo: String,
        /// Source language: python or java
        #[arg(short, long, default_value = "python")]
        lang: String,
        /// Prompt kind: review or commit
        #[arg(short, long, default_value = "review")]
        kind: String,
    },
}
