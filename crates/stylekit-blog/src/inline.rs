//! Inline prose rendering.
//!
//! Paragraph and list text is authored as CommonMark. Block-level paragraph
//! wrappers are dropped so the caller can supply its own element, and links
//! are rewritten so external targets open in a new tab.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Options for inline rendering.
#[derive(Debug, Clone, Default)]
pub struct InlineOptions {
    /// Class added to links that leave the site
    pub external_link_class: Option<String>,
}

/// Render inline CommonMark to an HTML fragment.
pub fn render_inline(source: &str, options: &InlineOptions) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);

    let events = parser.filter_map(|event| match event {
        Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) => None,
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => Some(Event::InlineHtml(CowStr::from(open_link(
            &dest_url, &title, options,
        )))),
        Event::End(TagEnd::Link) => Some(Event::InlineHtml(CowStr::Borrowed("</a>"))),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out.trim_end().to_string()
}

/// Whether a link target leaves the site.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

fn open_link(href: &str, title: &str, options: &InlineOptions) -> String {
    let mut tag = format!(r#"<a href="{}""#, escape_attr(href));

    if !title.is_empty() {
        tag.push_str(&format!(r#" title="{}""#, escape_attr(title)));
    }

    if is_external(href) {
        tag.push_str(r#" target="_blank" rel="noopener noreferrer""#);
        if let Some(class) = &options.external_link_class {
            tag.push_str(&format!(r#" class="{}""#, escape_attr(class)));
        }
    }

    tag.push('>');
    tag
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_code() {
        let html = render_inline(
            "**StyleKit** ships `!important` modifiers",
            &InlineOptions::default(),
        );

        assert_eq!(
            html,
            "<strong>StyleKit</strong> ships <code>!important</code> modifiers"
        );
    }

    #[test]
    fn passes_inline_html_through() {
        let html = render_inline("Unlike <mark>others</mark>.", &InlineOptions::default());
        assert_eq!(html, "Unlike <mark>others</mark>.");
    }

    #[test]
    fn escapes_text() {
        let html = render_inline("a & b", &InlineOptions::default());
        assert_eq!(html, "a &amp; b");
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let options = InlineOptions {
            external_link_class: Some("a--highlighted".to_string()),
        };
        let html = render_inline("[source](https://github.com/san-siva)", &options);

        assert_eq!(
            html,
            r#"<a href="https://github.com/san-siva" target="_blank" rel="noopener noreferrer" class="a--highlighted">source</a>"#
        );
    }

    #[test]
    fn internal_links_stay_plain() {
        let options = InlineOptions {
            external_link_class: Some("a--highlighted".to_string()),
        };
        let html = render_inline("[top](#overview)", &options);

        assert_eq!(html, r##"<a href="#overview">top</a>"##);
    }

    #[test]
    fn hard_breaks_become_br() {
        let html = render_inline("one\\\ntwo", &InlineOptions::default());
        assert!(html.contains("<br />"));
    }
}
