use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use crate::agent::{batch::process_directory, DocstringAgent};
use crate::config::{BatchConfig, DocstringConfig};

static PROCESSING: Emoji<'_, '_> = Emoji("📝 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static ERROR: Emoji<'_, '_> = Emoji("❌ ", "");

pub async fn run_batch(
    path: &Path,
    docstring_config: DocstringConfig,
    batch_config: BatchConfig,
    json: bool,
) -> Result<()> {
    let agent = Arc::new(DocstringAgent::new(&docstring_config)?);

    let pb = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("{}Processing {}...", PROCESSING, path.display()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    };

    let report = process_directory(agent, path, &batch_config).await?;
    pb.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
        return Ok(());
    }

    println!("\n{}Batch complete!\n", SUCCESS);
    println!(
        "  Files processed:     {}",
        style(report.files_processed()).green()
    );
    println!(
        "  Docstrings inserted: {}",
        style(report.docstrings_inserted()).cyan()
    );
    if let Some(output_dir) = &batch_config.output_dir {
        println!(
            "  Output directory:    {}",
            style(output_dir.display()).cyan()
        );
    }

    if !report.errors.is_empty() {
        println!("\n{}Failures ({}):", ERROR, report.errors.len());
        for (file, error) in report.errors.iter().take(10) {
            println!("  - {}: {}", file.display(), style(error).red());
        }
        if report.errors.len() > 10 {
            println!("  ... and {} more", report.errors.len() - 10);
        }
    }

    Ok(())
}
