//! Configuration file (`stylekit-docs.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stylekit_site::{BuildConfig, Metadata};

/// Default config file name.
pub const DEFAULT_PATH: &str = "stylekit-docs.toml";

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub dev: DevSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Name used in the document title
    pub title: String,
    pub description: String,
    pub base_url: String,
    /// Absolute origin for the sitemap
    pub site_url: Option<String>,
    pub output: String,
    /// Directory copied verbatim into the output
    pub public_dir: Option<String>,
    /// Extra stylesheets to include
    pub styles: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: stylekit_content::TITLE.to_string(),
            description: stylekit_content::DESCRIPTION.to_string(),
            base_url: "/".to_string(),
            site_url: None,
            output: "dist".to_string(),
            public_dir: None,
            styles: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DevSettings {
    pub port: u16,
    pub host: String,
    pub open: bool,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Site build settings, with an optional output directory override.
    pub fn build_config(&self, output: Option<PathBuf>) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            public_dir: self.site.public_dir.as_ref().map(PathBuf::from),
            minify: self.build.minify,
            base_url: normalize_base_url(&self.site.base_url),
            site_url: self.site.site_url.clone(),
            metadata: Metadata::documentation(&self.site.title, &self.site.description),
            styles: self.site.styles.clone(),
        }
    }
}

/// Ensure the base URL starts and ends with `/`.
fn normalize_base_url(base: &str) -> String {
    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = ConfigFile::load(&temp.path().join(DEFAULT_PATH)).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.dev.port, 7777);

        let build = config.build_config(None);
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert_eq!(build.metadata.title, "StyleKit - Documentation");
        assert!(build.minify);
    }

    #[test]
    fn parses_all_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_PATH);
        fs::write(
            &path,
            r#"
[site]
title = "Kit"
base_url = "docs"
site_url = "https://kit.example.com"
public_dir = "public"
styles = ["theme/brand.css"]

[build]
minify = false

[dev]
port = 3000
open = false
"#,
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.dev.port, 3000);
        assert!(!config.dev.open);
        assert_eq!(config.dev.host, "127.0.0.1");

        let build = config.build_config(Some(PathBuf::from("out")));
        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert_eq!(build.base_url, "/docs/");
        assert_eq!(build.public_dir, Some(PathBuf::from("public")));
        assert_eq!(build.styles, vec!["theme/brand.css".to_string()]);
        assert_eq!(build.metadata.title, "Kit - Documentation");
        assert!(!build.minify);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_PATH);
        fs::write(&path, "[site]\ntitle = 3\n").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_PATH);
        fs::write(&path, "[site]\ntitel = \"Kit\"\n").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn normalizes_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("docs"), "/docs/");
        assert_eq!(normalize_base_url("/a/b/"), "/a/b/");
    }
}
