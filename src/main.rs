use anyhow::Result;
use clap::Parser;

use docsmith::cli::{run_batch, run_docstring, run_readme, Args, Command};
use docsmith::config::{BatchConfig, DocstringConfig, ReadmeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    match args.command {
        Command::Docstring {
            path,
            output,
            style,
            dry_run,
            model,
            temperature,
        } => {
            let config = DocstringConfig {
                style,
                dry_run,
                model,
                temperature,
                ..DocstringConfig::default()
            };
            run_docstring(&path, output.as_deref(), config).await
        }

        Command::Batch {
            path,
            output_dir,
            workers,
            ignore,
            style,
            dry_run,
            model,
            temperature,
            json,
        } => {
            let docstring_config = DocstringConfig {
                style,
                dry_run,
                model,
                temperature,
                ..DocstringConfig::default()
            };
            let batch_config = BatchConfig {
                workers,
                extra_ignores: ignore,
                output_dir,
            };
            run_batch(&path, docstring_config, batch_config, json).await
        }

        Command::Readme {
            path,
            output,
            depth,
            max_context,
            model,
            temperature,
            stdout,
        } => {
            let config = ReadmeConfig {
                model,
                temperature,
                max_depth: depth,
                max_context_chars: max_context,
                ..ReadmeConfig::default()
            };
            run_readme(&path, &output, config, stdout).await
        }
    }
}
