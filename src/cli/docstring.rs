use std::path::Path;

use anyhow::Result;
use console::{style, Emoji};

use crate::agent::DocstringAgent;
use crate::config::DocstringConfig;

static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

pub async fn run_docstring(
    path: &Path,
    output: Option<&Path>,
    config: DocstringConfig,
) -> Result<()> {
    let agent = DocstringAgent::new(&config)?;
    let processed = agent.process_file(path, output).await?;

    for failure in &processed.failures {
        eprintln!(
            "{}{} (line {}): {}",
            WARN,
            style(&failure.name).yellow(),
            failure.line,
            failure.error
        );
    }

    match output {
        Some(output) => {
            println!(
                "{}Inserted {} docstring(s); wrote {}",
                SUCCESS,
                style(processed.inserted).green(),
                style(output.display()).cyan()
            );
        }
        None => print!("{}", processed.text),
    }

    Ok(())
}
