use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DocstringStyle, DEFAULT_MODEL};

#[derive(Parser)]
#[command(
    name = "docsmith",
    version,
    about = "Generate Python docstrings and project READMEs, offline or via the Anthropic API"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Insert docstrings into a single Python file
    Docstring {
        /// Python file to process
        path: PathBuf,

        /// Write the rewritten source here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Docstring layout
        #[arg(long, value_enum, default_value_t = DocstringStyle::Google)]
        style: DocstringStyle,

        /// Deterministic offline generation; no API key required
        #[arg(long)]
        dry_run: bool,

        /// Model used for remote generation
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Sampling temperature for remote generation
        #[arg(long, default_value_t = 0.7)]
        temperature: f32,
    },

    /// Insert docstrings into every Python file under a directory
    Batch {
        /// Directory to scan
        path: PathBuf,

        /// Mirror rewritten files under this directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Worker pool size (1 = sequential)
        #[arg(long, default_value_t = 4)]
        workers: usize,

        /// Extra directory names to ignore (repeatable)
        #[arg(long)]
        ignore: Vec<String>,

        /// Docstring layout
        #[arg(long, value_enum, default_value_t = DocstringStyle::Google)]
        style: DocstringStyle,

        /// Deterministic offline generation; no API key required
        #[arg(long)]
        dry_run: bool,

        /// Model used for remote generation
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Sampling temperature for remote generation
        #[arg(long, default_value_t = 0.7)]
        temperature: f32,

        /// Print a JSON summary instead of the human-readable report
        #[arg(long)]
        json: bool,
    },

    /// Generate a README.md for a project directory
    Readme {
        /// Project directory to summarize
        path: PathBuf,

        /// Output file, relative to the project directory unless absolute
        #[arg(short, long, default_value = "README.md")]
        output: PathBuf,

        /// Maximum directory depth in the outline
        #[arg(long, default_value_t = 3)]
        depth: usize,

        /// Maximum characters of context sent to the model
        #[arg(long, default_value_t = 50_000)]
        max_context: usize,

        /// Model used for generation
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Sampling temperature
        #[arg(long, default_value_t = 0.7)]
        temperature: f32,

        /// Print the README to stdout without writing a file
        #[arg(long)]
        stdout: bool,
    },
}
