//! Documentation content index for dex.
//!
//! This crate provides:
//! - [`Registry`]: immutable collections of component docs and getting-started
//!   pages, looked up by slug
//! - [`slugify`] and the TOC synthesizers ([`inject_examples`],
//!   [`toc_from_markdown`])
//! - [`group_by_category`] for category-ordered listings
//! - [`load_registry`] for the YAML content tree
//! - [`check`] for authoring defects
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use dex_content::{check, load_registry};
//!
//! let registry = load_registry(Path::new("content"))?;
//! let button = registry.components().get_by_slug("button");
//! for issue in check(&registry) {
//!     eprintln!("{issue}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Building TOCs directly:
//!
//! ```
//! use dex_content::{HeadingLevel, TocItem, slugify, toc_from_markdown};
//!
//! assert_eq!(slugify("Getting Started!"), "getting-started");
//! assert_eq!(
//!     toc_from_markdown("## Getting Started"),
//!     vec![TocItem::new("getting-started", "Getting Started", HeadingLevel::H2)]
//! );
//! ```

mod category;
mod loader;
mod registry;
mod slug;
mod toc;
mod types;
mod validate;

pub use category::{CategoryGroup, ComponentSummary, group_by_category, summarize};
pub use loader::{COMPONENTS_DIR, GUIDES_DIR, INDEX_FILENAME, LoadError, load_registry};
pub use registry::{Collection, CollectionKind, Registry, RegistryBuilder, RegistryError, Slugged};
pub use slug::slugify;
pub use toc::{EXAMPLES_MARKER, inject_examples, toc_from_markdown};
pub use types::{
    ComponentDoc, ComponentDocSource, ComponentIndexItem, ComponentMeta, ComponentStatus,
    DocExample, DocProp, DocSection, DocShowcase, GettingStartedItem, HeadingLevel,
    InvalidHeadingLevel, PageMeta, PageSection, Renderable, TocItem,
};
pub use validate::{ContentIssue, check};
