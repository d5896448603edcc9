//! Static site generator for the StyleKit documentation.
//!
//! Wraps the composed documentation page in the root layout (metadata, web
//! fonts, generated stylesheet) and writes a deployable site.

pub mod assets;
pub mod builder;
pub mod layout;
pub mod templates;

pub use builder::{
    BuildConfig, BuildError, BuildResult, DocumentRenderer, StaticBuilder,
    EXTERNAL_LINK_CLASS,
};
pub use layout::Metadata;
