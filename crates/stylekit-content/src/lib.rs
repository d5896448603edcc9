//! StyleKit documentation content.
//!
//! This crate holds everything the documentation page says: the catalog of
//! code examples, the design tokens behind the reference tables, the utility
//! classes the page markup uses, and the composed page itself.

pub mod catalog;
pub mod check;
pub mod page;
pub mod styles;
pub mod tokens;

pub use catalog::{Example, PACKAGE};
pub use check::{looks_like, verify_catalog, verify_page, Issue};
pub use page::{documentation, DESCRIPTION, TITLE};
pub use styles::{Side, Utility};
