//! Template engine for the document shell.

use minijinja::{context, Environment};
use stylekit_blog::TocEntry;

use crate::layout::Metadata;

/// Context for rendering the document shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// `<title>` and description
    pub metadata: Metadata,
    /// Rendered page HTML
    pub content: String,
    /// Table of contents
    pub toc: Vec<TocEntry>,
    /// Base URL
    pub base_url: String,
    /// Web font stylesheet
    pub fonts_url: String,
    /// Classes on `<body>`
    pub body_class: String,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
    /// Include the live reload client
    pub hmr: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("doc.html", DOC_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a page using the specified template.
    pub fn render_page(&self, template: &str, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            metadata => &context.metadata,
            content => &context.content,
            toc => &context.toc,
            base_url => &context.base_url,
            fonts_url => &context.fonts_url,
            body_class => &context.body_class,
            styles => &context.styles,
            hmr => context.hmr,
        })
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ metadata.title }}</title>
  <meta name="description" content="{{ metadata.description }}">
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link rel="stylesheet" href="{{ fonts_url }}">
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body class="{{ body_class }}">
  <div class="page">
    {% block content %}{% endblock %}
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
  {% if hmr %}<script src="{{ base_url }}__hmr.js"></script>{% endif %}
</body>
</html>"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="layout">
  <main class="main">
    {{ content | safe }}
  </main>

  {% if toc %}
  <aside class="toc">
    <p class="toc__title">On this page</p>
    <ul>
    {% for entry in toc %}
      <li class="toc-level-{{ entry.level }}">
        <a href="#{{ entry.id }}">{{ entry.title }}</a>
      </li>
    {% endfor %}
    </ul>
  </aside>
  {% endif %}
</div>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context {
            metadata: Metadata::default(),
            content: "<p>Hello world</p>".to_string(),
            toc: vec![],
            base_url: "/".to_string(),
            fonts_url: "https://fonts.example.com/css".to_string(),
            body_class: "font-rubik".to_string(),
            styles: vec![],
            hmr: false,
        }
    }

    #[test]
    fn renders_document_shell() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render_page("doc.html", &context()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>StyleKit - Documentation</title>"));
        assert!(html.contains("<body class=\"font-rubik\">"));
        assert!(html.contains("<div class=\"page\">"));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(!html.contains("class=\"toc\""));
        assert!(!html.contains("__hmr.js"));
    }

    #[test]
    fn renders_toc() {
        let engine = TemplateEngine::new().unwrap();
        let ctx = Context {
            toc: vec![
                TocEntry {
                    title: "Usage Patterns".to_string(),
                    id: "usage-patterns".to_string(),
                    level: 2,
                },
                TocEntry {
                    title: "Import All Modules".to_string(),
                    id: "import-all-modules".to_string(),
                    level: 3,
                },
            ],
            ..context()
        };

        let html = engine.render_page("doc.html", &ctx).unwrap();

        assert!(html.contains("<aside class=\"toc\">"));
        assert!(html.contains("<li class=\"toc-level-3\">"));
        assert!(html.contains("href=\"#usage-patterns\">Usage Patterns</a>"));
    }

    #[test]
    fn includes_reload_client_in_dev() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render_page("doc.html", &Context { hmr: true, ..context() })
            .unwrap();

        assert!(html.contains("__hmr.js"));
    }
}
