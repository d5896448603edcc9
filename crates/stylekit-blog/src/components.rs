//! Presentation components.
//!
//! A page is a [`Blog`]: a header followed by titled sections whose children
//! are paragraphs, code blocks, tables, callouts, lists and nested sections.
//! Components are plain values; rendering them is the job of
//! [`BlogRenderer`](crate::BlogRenderer).

use serde::Serialize;

use crate::language::Language;

/// A complete blog-style document.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    /// Page header
    pub header: BlogHeader,

    /// Top-level sections, in display order
    pub sections: Vec<BlogSection>,
}

/// The page header: title lines and description lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlogHeader {
    pub title: Vec<String>,
    pub desc: Vec<String>,
}

/// A titled section. Sections nest; a section inside a section renders one
/// heading level deeper.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogSection {
    pub title: String,
    pub children: Vec<Node>,
}

/// A child of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    Table(Table),
    Callout(Callout),
    List(List),
    Section(BlogSection),
}

/// A paragraph of inline CommonMark (emphasis, code spans, links, inline HTML).
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub classes: Vec<String>,
}

/// A highlighted source listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: Language,
    pub code: String,
    pub has_margin_up: bool,
    pub has_margin_down: bool,
}

/// A table whose rows always have as many cells as there are headers.
///
/// The only constructor takes fixed-size arrays, so a row of the wrong width
/// does not compile.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    pub has_margin_down: bool,
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Plain text
    Text { text: String },

    /// Monospace code
    Code { text: String },

    /// A color chip followed by the color value
    Swatch { color: String },

    /// Sample text rendered with an inline style
    Sample { text: String, style: String },
}

/// Inline style of a [`Cell::Sample`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleStyle {
    pub font_family: Option<String>,
    pub font_size_px: Option<u32>,
    pub font_weight: Option<u16>,
    pub line_height: Option<String>,
}

/// Visual flavor of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A boxed aside.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub kind: CalloutKind,
    pub children: Vec<Node>,
    pub has_margin_down: bool,
}

/// A bulleted or numbered list of inline CommonMark items.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<String>,
    pub item_classes: Vec<String>,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Section title
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (2-6)
    pub level: u8,
}

impl Blog {
    pub fn new(header: BlogHeader) -> Self {
        Self {
            header,
            sections: Vec::new(),
        }
    }

    /// Append a top-level section.
    pub fn section(mut self, section: BlogSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Titles of the top-level sections, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// Find a top-level section by title.
    pub fn find_section(&self, title: &str) -> Option<&BlogSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Every section in the document, depth-first, with its heading level.
    pub fn all_sections(&self) -> Vec<(&BlogSection, u8)> {
        let mut out = Vec::new();
        for section in &self.sections {
            collect_sections(section, 2, &mut out);
        }
        out
    }

    /// Table of contents for the top-level sections and their direct
    /// subsections.
    pub fn toc(&self) -> Vec<TocEntry> {
        self.all_sections()
            .into_iter()
            .filter(|(_, level)| *level <= 3)
            .map(|(section, level)| TocEntry {
                title: section.title.clone(),
                id: section.id(),
                level,
            })
            .collect()
    }
}

fn collect_sections<'a>(section: &'a BlogSection, level: u8, out: &mut Vec<(&'a BlogSection, u8)>) {
    out.push((section, level));
    for sub in section.subsections() {
        collect_sections(sub, level.saturating_add(1), out);
    }
}

impl BlogHeader {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: vec![title.into()],
            desc: vec![desc.into()],
        }
    }
}

impl BlogSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Anchor ID derived from the title.
    pub fn id(&self) -> String {
        slugify(&self.title)
    }

    /// Direct child sections.
    pub fn subsections(&self) -> impl Iterator<Item = &BlogSection> {
        self.children.iter().filter_map(|node| match node {
            Node::Section(section) => Some(section),
            _ => None,
        })
    }

    /// Every node below this section, depth-first, including nodes inside
    /// callouts and nested sections.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect_nodes(&self.children, &mut out);
        out
    }

    /// Code blocks at any depth.
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::CodeBlock(block) => Some(block),
                _ => None,
            })
            .collect()
    }

    /// Tables at any depth.
    pub fn tables(&self) -> Vec<&Table> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }
}

fn collect_nodes<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        out.push(node);
        match node {
            Node::Section(section) => collect_nodes(&section.children, out),
            Node::Callout(callout) => collect_nodes(&callout.children, out),
            _ => {}
        }
    }
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classes: Vec::new(),
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }
}

impl CodeBlock {
    /// A code block with margins above and below, the usual layout inside a
    /// section.
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            has_margin_up: true,
            has_margin_down: true,
        }
    }
}

impl Table {
    /// Build a table from `N` headers and rows of exactly `N` cells.
    pub fn new<const N: usize, R>(headers: [&str; N], rows: R) -> Self
    where
        R: IntoIterator<Item = [Cell; N]>,
    {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.into_iter().map(Vec::from).collect(),
            has_margin_down: false,
        }
    }

    pub fn margin_down(mut self) -> Self {
        self.has_margin_down = true;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

impl Cell {
    pub fn code(text: impl Into<String>) -> Self {
        Self::Code { text: text.into() }
    }

    pub fn swatch(color: impl Into<String>) -> Self {
        Self::Swatch {
            color: color.into(),
        }
    }

    pub fn sample(text: impl Into<String>, style: &SampleStyle) -> Self {
        Self::Sample {
            text: text.into(),
            style: style.to_css(),
        }
    }

    /// The textual content of the cell, without markup.
    pub fn plain_text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Code { text } | Self::Sample { text, .. } => text,
            Self::Swatch { color } => color,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

impl SampleStyle {
    pub fn font_family(family: impl Into<String>) -> Self {
        Self {
            font_family: Some(family.into()),
            ..Default::default()
        }
    }

    pub fn size(mut self, px: u32) -> Self {
        self.font_size_px = Some(px);
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn line_height(mut self, value: impl Into<String>) -> Self {
        self.line_height = Some(value.into());
        self
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(family) = &self.font_family {
            decls.push(format!("font-family: {}", family));
        }
        if let Some(px) = self.font_size_px {
            decls.push(format!("font-size: {}px", px));
        }
        if let Some(weight) = self.font_weight {
            decls.push(format!("font-weight: {}", weight));
        }
        if let Some(lh) = &self.line_height {
            decls.push(format!("line-height: {}", lh));
        }
        decls.join("; ")
    }
}

impl Callout {
    pub fn new(kind: CalloutKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            has_margin_down: false,
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn margin_down(mut self) -> Self {
        self.has_margin_down = true;
        self
    }
}

impl List {
    pub fn unordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: false,
            items: items.into_iter().map(Into::into).collect(),
            item_classes: Vec::new(),
        }
    }

    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: true,
            ..Self::unordered(items)
        }
    }

    pub fn with_item_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_classes.extend(classes.into_iter().map(Into::into));
        self
    }
}

macro_rules! impl_into_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_into_node!(Paragraph, CodeBlock, Table, Callout, List);

impl From<BlogSection> for Node {
    fn from(section: BlogSection) -> Self {
        Node::Section(section)
    }
}

/// Convert a title to a URL-safe anchor.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' || c == '/' || c == '.' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_blog() -> Blog {
        Blog::new(BlogHeader::new("Kit", "A kit"))
            .section(
                BlogSection::new("Usage Patterns")
                    .child(Paragraph::new("Intro"))
                    .child(
                        BlogSection::new("Import All")
                            .child(CodeBlock::new(Language::Scss, "@use 'kit';")),
                    ),
            )
            .section(
                BlogSection::new("Notes").child(
                    Callout::new(CalloutKind::Info)
                        .child(CodeBlock::new(Language::Bash, "npm install kit")),
                ),
            )
    }

    #[test]
    fn slugifies_titles() {
        assert_eq!(slugify("Usage Patterns"), "usage-patterns");
        assert_eq!(slugify("React / Next.js"), "react-next-js");
        assert_eq!(slugify("Vue.js"), "vue-js");
        assert_eq!(slugify("  Colors   Module "), "colors-module");
    }

    #[test]
    fn lists_sections_with_levels() {
        let blog = sample_blog();
        let levels: Vec<(&str, u8)> = blog
            .all_sections()
            .into_iter()
            .map(|(s, l)| (s.title.as_str(), l))
            .collect();

        assert_eq!(
            levels,
            vec![("Usage Patterns", 2), ("Import All", 3), ("Notes", 2)]
        );
    }

    #[test]
    fn collects_nested_code_blocks() {
        let blog = sample_blog();

        let usage = blog.find_section("Usage Patterns").unwrap();
        assert_eq!(usage.code_blocks().len(), 1);

        // Blocks inside callouts count too.
        let notes = blog.find_section("Notes").unwrap();
        assert_eq!(notes.code_blocks()[0].language, Language::Bash);
    }

    #[test]
    fn builds_toc() {
        let toc = sample_blog().toc();

        assert_eq!(toc.len(), 3);
        assert_eq!(toc[1].id, "import-all");
        assert_eq!(toc[1].level, 3);
    }

    #[test]
    fn table_rows_match_header_width() {
        let table = Table::new(
            ["Key", "Value"],
            [["a".into(), Cell::code("1")], ["b".into(), Cell::swatch("#fff")]],
        );

        assert_eq!(table.width(), 2);
        assert!(table.rows().iter().all(|row| row.len() == table.width()));
        assert_eq!(table.rows()[1][1].plain_text(), "#fff");
    }

    #[test]
    fn sample_style_renders_declarations() {
        let style = SampleStyle::font_family("'Rubik', sans-serif")
            .size(18)
            .weight(600)
            .line_height("1.2");

        assert_eq!(
            style.to_css(),
            "font-family: 'Rubik', sans-serif; font-size: 18px; font-weight: 600; line-height: 1.2"
        );
    }
}
