//! HTML rendering of presentation components.

use minijinja::{context, Environment};

use crate::components::{Blog, BlogHeader, BlogSection, Callout, CodeBlock, List, Node, Paragraph, Table};
use crate::inline::{render_inline, InlineOptions};

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders a [`Blog`] to an HTML fragment.
///
/// Output is a pure function of the input tree: rendering the same tree twice
/// yields identical bytes.
pub struct BlogRenderer {
    env: Environment<'static>,
    inline: InlineOptions,
}

impl BlogRenderer {
    /// Create a renderer with the built-in component templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self {
            env,
            inline: InlineOptions::default(),
        })
    }

    /// Class applied to links that leave the site.
    pub fn with_external_link_class(mut self, class: impl Into<String>) -> Self {
        self.inline.external_link_class = Some(class.into());
        self
    }

    /// Render a complete document.
    pub fn render(&self, blog: &Blog) -> Result<String, RenderError> {
        let header = self.render_header(&blog.header)?;

        let sections = blog
            .sections
            .iter()
            .map(|section| self.render_section(section, 2))
            .collect::<Result<Vec<_>, _>>()?;

        let tmpl = self.env.get_template("blog.html")?;
        Ok(tmpl.render(context! { header, sections })?)
    }

    fn render_header(&self, header: &BlogHeader) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("header.html")?;
        Ok(tmpl.render(context! {
            title => &header.title,
            desc => &header.desc,
        })?)
    }

    fn render_section(&self, section: &BlogSection, level: u8) -> Result<String, RenderError> {
        let content = self.render_nodes(&section.children, level)?;

        let tmpl = self.env.get_template("section.html")?;
        Ok(tmpl.render(context! {
            id => section.id(),
            title => &section.title,
            level => level.min(6),
            content,
        })?)
    }

    fn render_nodes(&self, nodes: &[Node], level: u8) -> Result<String, RenderError> {
        let parts = nodes
            .iter()
            .map(|node| self.render_node(node, level))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join("\n"))
    }

    fn render_node(&self, node: &Node, level: u8) -> Result<String, RenderError> {
        match node {
            Node::Paragraph(paragraph) => self.render_paragraph(paragraph),
            Node::CodeBlock(block) => self.render_code_block(block),
            Node::Table(table) => self.render_table(table),
            Node::Callout(callout) => self.render_callout(callout, level),
            Node::List(list) => self.render_list(list),
            Node::Section(section) => self.render_section(section, level.saturating_add(1)),
        }
    }

    fn render_paragraph(&self, paragraph: &Paragraph) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("paragraph.html")?;
        Ok(tmpl.render(context! {
            classes => &paragraph.classes,
            html => render_inline(&paragraph.text, &self.inline),
        })?)
    }

    fn render_code_block(&self, block: &CodeBlock) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("code_block.html")?;
        Ok(tmpl.render(context! {
            language => block.language.as_str(),
            label => block.language.label(),
            code => &block.code,
            has_margin_up => block.has_margin_up,
            has_margin_down => block.has_margin_down,
        })?)
    }

    fn render_table(&self, table: &Table) -> Result<String, RenderError> {
        let tmpl = self.env.get_template("table.html")?;
        Ok(tmpl.render(context! {
            headers => table.headers(),
            rows => table.rows(),
            has_margin_down => table.has_margin_down,
        })?)
    }

    fn render_callout(&self, callout: &Callout, level: u8) -> Result<String, RenderError> {
        let content = self.render_nodes(&callout.children, level)?;

        let tmpl = self.env.get_template("callout.html")?;
        Ok(tmpl.render(context! {
            kind => callout.kind,
            content,
            has_margin_down => callout.has_margin_down,
        })?)
    }

    fn render_list(&self, list: &List) -> Result<String, RenderError> {
        let items: Vec<String> = list
            .items
            .iter()
            .map(|item| render_inline(item, &self.inline))
            .collect();

        let tmpl = self.env.get_template("list.html")?;
        Ok(tmpl.render(context! {
            tag => if list.ordered { "ol" } else { "ul" },
            items,
            item_classes => &list.item_classes,
        })?)
    }
}

const TEMPLATES: [(&str, &str); 8] = [
    ("blog.html", BLOG_TEMPLATE),
    ("header.html", HEADER_TEMPLATE),
    ("section.html", SECTION_TEMPLATE),
    ("paragraph.html", PARAGRAPH_TEMPLATE),
    ("code_block.html", CODE_BLOCK_TEMPLATE),
    ("table.html", TABLE_TEMPLATE),
    ("callout.html", CALLOUT_TEMPLATE),
    ("list.html", LIST_TEMPLATE),
];

const BLOG_TEMPLATE: &str = r##"<article class="blog">
{{ header | safe }}
{% for section in sections %}{{ section | safe }}
{% endfor %}</article>"##;

const HEADER_TEMPLATE: &str = r##"<header class="blog-header">
  <h1 class="blog-header__title">{% for line in title %}<span>{{ line }}</span>{% endfor %}</h1>
  {% for line in desc %}<p class="blog-header__desc">{{ line }}</p>
  {% endfor %}
</header>"##;

const SECTION_TEMPLATE: &str = r##"<section class="blog-section blog-section--level-{{ level }}" id="{{ id }}">
<h{{ level }} class="blog-section__title"><a href="#{{ id }}">{{ title }}</a></h{{ level }}>
{{ content | safe }}
</section>"##;

const PARAGRAPH_TEMPLATE: &str = r##"<p{% if classes %} class="{{ classes | join(" ") }}"{% endif %}>{{ html | safe }}</p>"##;

const CODE_BLOCK_TEMPLATE: &str = r##"<figure class="code-block{% if has_margin_up %} has-margin-up{% endif %}{% if has_margin_down %} has-margin-down{% endif %}" data-language="{{ language }}">
<figcaption class="code-block__label">{{ label }}</figcaption>
<pre><code class="language-{{ language }}">{{ code }}</code></pre>
</figure>"##;

const TABLE_TEMPLATE: &str = r##"{% macro cell(c) -%}
{%- if c.kind == "code" %}<code>{{ c.text }}</code>
{%- elif c.kind == "swatch" %}<div class="swatch"><div class="swatch__chip" style="background-color: {{ c.color }}"></div><code>{{ c.color }}</code></div>
{%- elif c.kind == "sample" %}<span style="{{ c.style }}">{{ c.text }}</span>
{%- else %}{{ c.text }}{% endif -%}
{%- endmacro -%}
<div class="table{% if has_margin_down %} has-margin-down{% endif %}">
<table>
<thead><tr>{% for header in headers %}<th>{{ header }}</th>{% endfor %}</tr></thead>
<tbody>
{% for row in rows %}<tr>{% for c in row %}<td>{{ cell(c) }}</td>{% endfor %}</tr>
{% endfor %}</tbody>
</table>
</div>"##;

const CALLOUT_TEMPLATE: &str = r##"<aside class="callout callout--{{ kind }}{% if has_margin_down %} has-margin-down{% endif %}" role="note">
{{ content | safe }}
</aside>"##;

const LIST_TEMPLATE: &str = r##"<{{ tag }}>
{% for item in items %}<li{% if item_classes %} class="{{ item_classes | join(" ") }}"{% endif %}>{{ item | safe }}</li>
{% endfor %}</{{ tag }}>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{BlogHeader, CalloutKind, Cell, SampleStyle};
    use crate::language::Language;

    fn renderer() -> BlogRenderer {
        BlogRenderer::new().unwrap()
    }

    #[test]
    fn renders_header_and_sections() {
        let blog = Blog::new(BlogHeader::new("StyleKit", "A design system"))
            .section(BlogSection::new("Overview").child(Paragraph::new("Hello **world**")));

        let html = renderer().render(&blog).unwrap();

        assert!(html.contains("<span>StyleKit</span>"));
        assert!(html.contains(r#"<p class="blog-header__desc">A design system</p>"#));
        assert!(html.contains(r#"id="overview""#));
        assert!(html.contains("<h2 class=\"blog-section__title\"><a href=\"#overview\">Overview</a></h2>"));
        assert!(html.contains("<p>Hello <strong>world</strong></p>"));
    }

    #[test]
    fn nested_sections_render_one_level_deeper() {
        let blog = Blog::new(BlogHeader::default()).section(
            BlogSection::new("Usage").child(BlogSection::new("Import All Modules")),
        );

        let html = renderer().render(&blog).unwrap();

        assert!(html.contains(r##"<h3 class="blog-section__title"><a href="#import-all-modules">"##));
    }

    #[test]
    fn escapes_code() {
        let blog = Blog::new(BlogHeader::default()).section(
            BlogSection::new("Code")
                .child(CodeBlock::new(Language::Tsx, "<div className={styles['a']}>")),
        );

        let html = renderer().render(&blog).unwrap();

        assert!(html.contains(r#"<code class="language-tsx">&lt;div className={styles[&#x27;a&#x27;]}&gt;</code>"#));
        assert!(html.contains("has-margin-up has-margin-down"));
    }

    #[test]
    fn renders_table_cells() {
        let table = Table::new(
            ["Variable", "Preview", "Sample"],
            [[
                Cell::code("$color--primary"),
                Cell::swatch("#4242fa"),
                Cell::sample("Lorem", &SampleStyle::default().size(18)),
            ]],
        )
        .margin_down();

        let blog = Blog::new(BlogHeader::default()).section(BlogSection::new("T").child(table));
        let html = renderer().render(&blog).unwrap();

        assert!(html.contains("<th>Variable</th><th>Preview</th><th>Sample</th>"));
        assert!(html.contains("<td><code>$color--primary</code></td>"));
        assert!(html.contains(r#"style="background-color: #4242fa""#));
        assert!(html.contains(r#"<span style="font-size: 18px">Lorem</span>"#));
        assert!(html.contains(r#"class="table has-margin-down""#));
    }

    #[test]
    fn renders_callouts_and_lists() {
        let blog = Blog::new(BlogHeader::default()).section(
            BlogSection::new("Notes")
                .child(
                    Callout::new(CalloutKind::Info)
                        .child(Paragraph::new("Use `rem()`"))
                        .margin_down(),
                )
                .child(
                    List::ordered(["**Audit** styles", "Map tokens"])
                        .with_item_classes(["margin-bottom--2"]),
                ),
        );

        let html = renderer().render(&blog).unwrap();

        assert!(html.contains(r#"<aside class="callout callout--info has-margin-down" role="note">"#));
        assert!(html.contains("<p>Use <code>rem()</code></p>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains(r#"<li class="margin-bottom--2"><strong>Audit</strong> styles</li>"#));
    }

    #[test]
    fn applies_external_link_class() {
        let renderer = renderer().with_external_link_class("a--highlighted");
        let blog = Blog::new(BlogHeader::default()).section(
            BlogSection::new("About").child(Paragraph::new("[GitHub](https://github.com/san-siva)")),
        );

        let html = renderer.render(&blog).unwrap();

        assert!(html.contains(r#"class="a--highlighted">GitHub</a>"#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let blog = Blog::new(BlogHeader::new("A", "B"))
            .section(BlogSection::new("One").child(Paragraph::new("x")))
            .section(BlogSection::new("Two").child(CodeBlock::new(Language::Bash, "npm i")));

        let renderer = renderer();
        assert_eq!(renderer.render(&blog).unwrap(), renderer.render(&blog).unwrap());
    }
}
