//! Consistency checks over the catalog and the composed page.
//!
//! These catch what the type system cannot: example text that is blank or
//! does not resemble its language, duplicate anchors, and classes without a
//! stylesheet rule.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use stylekit_blog::{Blog, Language, Node};
use thiserror::Error;

use crate::catalog::Example;
use crate::styles::Utility;

/// A problem found by [`verify_catalog`] or [`verify_page`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("example {name} is empty")]
    EmptyExample { name: &'static str },

    #[error("example {name} does not look like {language}")]
    ImplausibleExample {
        name: &'static str,
        language: Language,
    },

    #[error("section '{section}' has an empty code block")]
    EmptyCodeBlock { section: String },

    #[error("section '{section}' has a code block that does not look like {language}")]
    ImplausibleCodeBlock { section: String, language: Language },

    #[error("table in section '{section}' has a row of {found} cells, expected {expected}")]
    RaggedTable {
        section: String,
        expected: usize,
        found: usize,
    },

    #[error("anchor '{id}' is used by {count} sections")]
    DuplicateAnchor { id: String, count: usize },

    #[error("class '{class}' in section '{section}' has no stylesheet rule")]
    UndefinedUtility { section: String, class: String },
}

/// Check every catalog example.
pub fn verify_catalog() -> Vec<Issue> {
    let mut issues = Vec::new();

    for example in Example::ALL {
        let source = example.source();
        if source.trim().is_empty() {
            issues.push(Issue::EmptyExample {
                name: example.name(),
            });
        } else if !looks_like(example.language(), source) {
            issues.push(Issue::ImplausibleExample {
                name: example.name(),
                language: example.language(),
            });
        }
    }

    issues
}

/// Check a composed page.
pub fn verify_page(blog: &Blog) -> Vec<Issue> {
    let mut issues = Vec::new();
    let defined: HashSet<String> = Utility::all().iter().map(|u| u.class_name()).collect();
    let mut anchors: HashMap<String, usize> = HashMap::new();

    for (section, _) in blog.all_sections() {
        *anchors.entry(section.id()).or_default() += 1;

        let mut undefined = |classes: &[String]| {
            for class in classes {
                if !defined.contains(class) {
                    issues.push(Issue::UndefinedUtility {
                        section: section.title.clone(),
                        class: class.clone(),
                    });
                }
            }
        };

        // Nested sections are visited on their own, so only look at direct
        // children and the contents of callouts.
        for node in own_nodes(&section.children) {
            match node {
                Node::Paragraph(paragraph) => undefined(&paragraph.classes),
                Node::List(list) => undefined(&list.item_classes),
                _ => {}
            }
        }

        for node in own_nodes(&section.children) {
            match node {
                Node::CodeBlock(block) if block.code.trim().is_empty() => {
                    issues.push(Issue::EmptyCodeBlock {
                        section: section.title.clone(),
                    });
                }
                Node::CodeBlock(block) if !looks_like(block.language, &block.code) => {
                    issues.push(Issue::ImplausibleCodeBlock {
                        section: section.title.clone(),
                        language: block.language,
                    });
                }
                Node::Table(table) => {
                    for row in table.rows() {
                        if row.len() != table.width() {
                            issues.push(Issue::RaggedTable {
                                section: section.title.clone(),
                                expected: table.width(),
                                found: row.len(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let mut duplicates: Vec<_> = anchors.into_iter().filter(|(_, count)| *count > 1).collect();
    duplicates.sort();
    issues.extend(
        duplicates
            .into_iter()
            .map(|(id, count)| Issue::DuplicateAnchor { id, count }),
    );

    issues
}

fn own_nodes(nodes: &[Node]) -> Vec<&Node> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            Node::Section(_) => {}
            Node::Callout(callout) => {
                out.push(node);
                out.extend(own_nodes(&callout.children));
            }
            _ => out.push(node),
        }
    }
    out
}

/// Whether `code` plausibly is source in `language`.
///
/// This is a smoke test, not a parser: it only has to tell a real snippet
/// from a blank or misfiled one.
pub fn looks_like(language: Language, code: &str) -> bool {
    let code = code.trim();
    if code.is_empty() {
        return false;
    }

    match language {
        Language::Bash => code
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .all(|line| INSTALL_RE.is_match(line)),
        Language::Scss => {
            balanced_braces(code)
                && (DECLARATION_RE.is_match(code) || AT_RULE_RE.is_match(code))
        }
        Language::Tsx => balanced_braces(code) && ELEMENT_RE.is_match(code),
        Language::Vue => code.contains("<template>"),
        Language::Text => true,
    }
}

fn balanced_braces(code: &str) -> bool {
    let mut depth: i64 = 0;
    for c in code.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

static INSTALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(npm|pnpm|yarn)\s+(install|add|i)\s+(@[a-z0-9._-]+/)?[a-z0-9._-]+$")
        .expect("Invalid install command regex")
});

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z-]+\s*:\s*[^;{}]+;").expect("Invalid declaration regex"));

static AT_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(use|import|forward)\b").expect("Invalid at-rule regex"));

static ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z][^>]*>").expect("Invalid element regex"));
