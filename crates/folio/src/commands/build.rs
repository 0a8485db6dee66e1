//! Static export command.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use folio_doc::Portfolio;
use folio_render::export_to_file;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Exporting portfolio...");
    let start = Instant::now();

    let config = load_config(config_path)?;

    let document = PathBuf::from(&config.portfolio.file);
    let json = fs::read_to_string(&document)
        .with_context(|| format!("Failed to read {}", document.display()))?;
    let portfolio = Portfolio::from_json(&json)
        .with_context(|| format!("Failed to parse {}", document.display()))?;

    let output = output.unwrap_or_else(|| PathBuf::from(&config.portfolio.output));
    let path = export_to_file(&portfolio, &output)?;

    tracing::info!(
        "Exported {} sections in {}ms",
        portfolio.sections.len(),
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", path.display());

    Ok(())
}
