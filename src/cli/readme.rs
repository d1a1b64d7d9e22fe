use std::path::{Path, PathBuf};

use anyhow::Result;
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ReadmeConfig;
use crate::readme::ReadmeAgent;

static ANALYZING: Emoji<'_, '_> = Emoji("🔎 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

pub async fn run_readme(
    path: &Path,
    output: &Path,
    config: ReadmeConfig,
    to_stdout: bool,
) -> Result<()> {
    let agent = ReadmeAgent::from_env(config)?;

    let target: Option<PathBuf> = if to_stdout {
        None
    } else if output.is_absolute() {
        Some(output.to_path_buf())
    } else {
        Some(path.join(output))
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("{}Summarizing {}...", ANALYZING, path.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let readme = agent.process(path, target.as_deref()).await?;
    pb.finish_and_clear();

    match target {
        Some(target) => println!(
            "{}README written to {}",
            SUCCESS,
            style(target.display()).cyan()
        ),
        None => print!("{readme}"),
    }

    Ok(())
}
