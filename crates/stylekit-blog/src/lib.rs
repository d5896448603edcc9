//! Blog-style presentation components.
//!
//! This crate provides the component vocabulary documentation pages are
//! written in (`Blog`, `BlogHeader`, `BlogSection`, `CodeBlock`, `Callout`,
//! `Table`) and renders a component tree to HTML.

pub mod components;
pub mod inline;
pub mod language;
pub mod render;
pub mod theme;

pub use components::{
    slugify, Blog, BlogHeader, BlogSection, Callout, CalloutKind, Cell, CodeBlock, List, Node,
    Paragraph, SampleStyle, Table, TocEntry,
};
pub use inline::{render_inline, InlineOptions};
pub use language::Language;
pub use render::{BlogRenderer, RenderError};
