//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use stylekit_site::StaticBuilder;

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = ConfigFile::load(config_path)?;

    let mut config = file_config.build_config(output);
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} page with {} sections and {} code blocks in {}ms",
        result.pages,
        result.sections,
        result.code_blocks,
        result.duration_ms
    );
    if result.public_files > 0 {
        tracing::info!("Copied {} public files", result.public_files);
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
