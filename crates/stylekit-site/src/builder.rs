//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use pulldown_cmark::{Event, Parser};
use walkdir::WalkDir;

use stylekit_blog::{Blog, BlogRenderer, BlogSection, Node};
use stylekit_content::{documentation, verify_page};

use crate::assets::AssetPipeline;
use crate::layout::{body_class, google_fonts_url, Metadata};
use crate::templates::{Context, TemplateEngine};

/// Class given to links that leave the site.
pub const EXTERNAL_LINK_CLASS: &str = "a--highlighted";

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory copied verbatim into the output
    pub public_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Absolute origin used in the sitemap, e.g. `https://stylekit.dev`
    pub site_url: Option<String>,

    /// Document title and description
    pub metadata: Metadata,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: None,
            minify: true,
            base_url: "/".to_string(),
            site_url: None,
            metadata: Metadata::default(),
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of sections at any depth
    pub sections: usize,

    /// Number of code blocks on the page
    pub code_blocks: usize,

    /// Number of files copied from the public directory
    pub public_files: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read input: {0}")]
    ReadError(String),

    #[error("Failed to render page: {0}")]
    RenderError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Renders the documentation page into a full HTML document.
pub struct DocumentRenderer {
    blog: BlogRenderer,
    templates: TemplateEngine,
}

impl DocumentRenderer {
    pub fn new() -> Result<Self, BuildError> {
        let blog = BlogRenderer::new()
            .map_err(|e| BuildError::RenderError(e.to_string()))?
            .with_external_link_class(EXTERNAL_LINK_CLASS);
        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(Self { blog, templates })
    }

    /// Render `page` inside the document shell.
    ///
    /// `hmr` adds the live reload client for the dev server.
    pub fn render(&self, page: &Blog, config: &BuildConfig, hmr: bool) -> Result<String, BuildError> {
        let content = self
            .blog
            .render(page)
            .map_err(|e| BuildError::RenderError(e.to_string()))?;

        let context = Context {
            metadata: config.metadata.clone(),
            content,
            toc: page.toc(),
            base_url: config.base_url.clone(),
            fonts_url: google_fonts_url(),
            body_class: body_class(),
            styles: config
                .styles
                .iter()
                .map(|s| format!("{}assets/{}", config.base_url, style_file_name(s)))
                .collect(),
            hmr,
        };

        self.templates
            .render_page("doc.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let page = documentation();
        for issue in verify_page(&page) {
            tracing::warn!("{}", issue);
        }

        let html = DocumentRenderer::new()?.render(&page, &self.config, false)?;
        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Generate assets
        self.generate_assets()?;

        let public_files = self.copy_public_dir()?;

        // Generate search index
        self.generate_search_index(&page)?;

        // Generate sitemap
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: 1,
            sections: page.all_sections().len(),
            code_blocks: page.sections.iter().map(|s| s.code_blocks().len()).sum(),
            public_files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Generate main CSS
        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Serving unminified CSS: {}", e);
                    css
                }
            }
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("Failed to read stylesheet: {}", e))
                })?;
                fs::write(assets_dir.join(style_file_name(style_path)), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Copy the public directory into the output root.
    fn copy_public_dir(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }
            fs::copy(path, &target).map_err(|e| {
                BuildError::WriteError(format!("{}: {}", target.display(), e))
            })?;
            copied += 1;
        }

        tracing::debug!("Copied {} public files", copied);
        Ok(copied)
    }

    /// Generate search index, one entry per top-level section.
    fn generate_search_index(&self, page: &Blog) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = page
            .sections
            .iter()
            .map(|section| {
                serde_json::json!({
                    "title": section.title,
                    "url": format!("{}#{}", self.config.base_url, section.id()),
                    "subsections": section
                        .subsections()
                        .map(|s| s.title.as_str())
                        .collect::<Vec<_>>(),
                    "content": section_text(section),
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let origin = self
            .config
            .site_url
            .as_deref()
            .unwrap_or("")
            .trim_end_matches('/');
        let root = format!("{}{}", origin, self.config.base_url);

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{}</loc>
  </url>
</urlset>"#,
            root
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Also generate robots.txt
        let robots = format!("User-agent: *\nAllow: /\nSitemap: {}sitemap.xml", root);
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

fn style_file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("style.css")
}

/// Plain text of a section's own paragraphs, markup stripped.
fn section_text(section: &BlogSection) -> String {
    let mut words = Vec::new();

    for node in &section.children {
        if let Node::Paragraph(paragraph) = node {
            for event in Parser::new(&paragraph.text) {
                match event {
                    Event::Text(text) | Event::Code(text) => words.push(text.to_string()),
                    Event::SoftBreak | Event::HardBreak => words.push(" ".to_string()),
                    _ => {}
                }
            }
            words.push(" ".to_string());
        }
    }

    words
        .concat()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_documentation_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let config = BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        };

        let builder = StaticBuilder::new(config);
        let result = builder.build().await.unwrap();

        assert_eq!(result.pages, 1);
        assert_eq!(result.code_blocks, 27);
        assert!(result.sections > 18);

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title>StyleKit - Documentation</title>"));
        assert!(html.contains("id=\"utils-module\""));
        assert!(html.contains("id=\"react-next-js\""));
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn generates_search_index() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        });

        builder.build().await.unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&index).unwrap();

        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0]["title"], "Overview");
        assert_eq!(entries[4]["url"], "/#usage-patterns");
        assert_eq!(entries[4]["subsections"][0], "Import All Modules");
        assert!(entries[0]["content"]
            .as_str()
            .unwrap()
            .starts_with("StyleKit is a comprehensive"));
    }

    #[tokio::test]
    async fn copies_public_dir_and_styles() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        let out = temp.path().join("dist");

        fs::create_dir_all(public.join("images")).unwrap();
        fs::write(public.join("favicon.ico"), b"icon").unwrap();
        fs::write(public.join("images/logo.svg"), "<svg/>").unwrap();

        let style = temp.path().join("brand.css");
        fs::write(&style, ".brand { color: red; }").unwrap();

        let builder = StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            public_dir: Some(public),
            minify: false,
            styles: vec![style.display().to_string()],
            ..Default::default()
        });

        let result = builder.build().await.unwrap();

        assert_eq!(result.public_files, 2);
        assert!(out.join("favicon.ico").exists());
        assert!(out.join("images/logo.svg").exists());
        assert_eq!(
            fs::read_to_string(out.join("assets/brand.css")).unwrap(),
            ".brand { color: red; }"
        );
    }

    #[tokio::test]
    async fn writes_sitemap_with_site_url() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            site_url: Some("https://stylekit.example.com/".to_string()),
            ..Default::default()
        });

        builder.build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://stylekit.example.com/</loc>"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://stylekit.example.com/sitemap.xml"));
    }

    #[test]
    fn renders_deterministically() {
        let config = BuildConfig::default();
        let renderer = DocumentRenderer::new().unwrap();
        let first = renderer.render(&documentation(), &config, false).unwrap();
        let second = renderer.render(&documentation(), &config, false).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn strips_markup_from_section_text() {
        let section = BlogSection::new("Intro")
            .child(stylekit_blog::Paragraph::new("**Bold** and `code` [link](https://x.dev)"));

        assert_eq!(section_text(&section), "Bold and code link");
    }
}
