//! Initialize a docs project.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the init command in the current directory.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing stylekit-docs...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    for path in scaffold(Path::new("."), config_path, yes)? {
        tracing::info!("Created {}", path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'stylekit-docs dev' to start the development server.");

    Ok(())
}

/// Write the config file and starter directories under `root`.
///
/// Existing files are kept unless `overwrite` is set. Returns the files and
/// directories created.
fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    let config = root.join(config_path);
    if !config.exists() || overwrite {
        fs::write(&config, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config.display()))?;
        created.push(config);
    }

    let public_dir = root.join("public");
    if !public_dir.exists() {
        fs::create_dir_all(&public_dir).context("Failed to create public directory")?;
        created.push(public_dir);
    }

    let styles_dir = root.join("styles");
    if !styles_dir.exists() {
        fs::create_dir_all(&styles_dir).context("Failed to create styles directory")?;
    }

    let brand = styles_dir.join("brand.css");
    if !brand.exists() || overwrite {
        fs::write(&brand, DEFAULT_BRAND_CSS).context("Failed to write styles/brand.css")?;
        created.push(brand);
    }

    Ok(created)
}

const DEFAULT_CONFIG: &str = r#"# stylekit-docs configuration

[site]
# Package name shown in the document title
title = "StyleKit"

# Base URL (for deployment under a sub-path)
base_url = "/"

# Absolute origin used in sitemap.xml
# site_url = "https://example.com"

# Output directory for the built site
output = "dist"

# Copied verbatim into the output (favicons, images)
public_dir = "public"

# Extra stylesheets loaded after the generated one
styles = ["styles/brand.css"]

[build]
# Minify the generated stylesheet
minify = true

[dev]
port = 7777
open = true
"#;

const DEFAULT_BRAND_CSS: &str = r#"/* Overrides loaded after the StyleKit stylesheet. */
:root {
  --color-primary: #4242fa;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, DEFAULT_PATH};
    use tempfile::tempdir;

    #[test]
    fn default_config_parses() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.site.title, "StyleKit");
        assert_eq!(config.site.public_dir.as_deref(), Some("public"));
        assert_eq!(config.site.styles, vec!["styles/brand.css".to_string()]);
        assert_eq!(config.dev.port, 7777);
    }

    #[test]
    fn scaffolds_project() {
        let temp = tempdir().unwrap();
        let created = scaffold(temp.path(), Path::new(DEFAULT_PATH), false).unwrap();

        assert_eq!(created.len(), 3);
        assert!(temp.path().join(DEFAULT_PATH).exists());
        assert!(temp.path().join("public").is_dir());
        assert!(temp.path().join("styles/brand.css").exists());
    }

    #[test]
    fn keeps_existing_files_without_overwrite() {
        let temp = tempdir().unwrap();
        let config = temp.path().join(DEFAULT_PATH);
        fs::write(&config, "[site]\ntitle = \"Mine\"\n").unwrap();

        scaffold(temp.path(), Path::new(DEFAULT_PATH), false).unwrap();
        assert_eq!(fs::read_to_string(&config).unwrap(), "[site]\ntitle = \"Mine\"\n");

        scaffold(temp.path(), Path::new(DEFAULT_PATH), true).unwrap();
        assert_eq!(fs::read_to_string(&config).unwrap(), DEFAULT_CONFIG);
    }
}
