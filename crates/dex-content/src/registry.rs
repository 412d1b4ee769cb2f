//! In-memory content registry.
//!
//! The [`Registry`] is built once through [`RegistryBuilder`] and is
//! read-only afterwards, so it can be shared behind an `Arc` without locking.
//!
//! # Architecture
//!
//! Each collection stores records in a `Vec` in insertion order with a
//! `HashMap` from slug to position:
//! - O(1) lookups by slug
//! - listing order is authoring order

use std::collections::HashMap;
use std::fmt;

use crate::types::{
    ComponentDoc, ComponentDocSource, ComponentIndexItem, GettingStartedItem, PageSection,
};

/// Records addressable by slug.
pub trait Slugged {
    /// URL-safe identifier of the record.
    fn slug(&self) -> &str;
}

impl Slugged for ComponentIndexItem {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for ComponentDoc {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for GettingStartedItem {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for PageSection {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Which collection a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    /// Component index entries.
    ComponentIndex,
    /// Full component docs.
    Components,
    /// Getting-started navigation entries.
    GettingStarted,
    /// Getting-started pages.
    Guides,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ComponentIndex => "component index",
            Self::Components => "component docs",
            Self::GettingStarted => "getting-started list",
            Self::Guides => "getting-started pages",
        };
        f.write_str(name)
    }
}

/// Error raised while building a registry.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two records in one collection share a slug.
    #[error("Duplicate slug '{slug}' in {collection}")]
    DuplicateSlug {
        /// Collection holding both records.
        collection: CollectionKind,
        /// The repeated slug.
        slug: String,
    },
}

/// Ordered records with slug lookup.
#[derive(Debug)]
pub struct Collection<T> {
    kind: CollectionKind,
    records: Vec<T>,
    slug_index: HashMap<String, usize>,
}

impl<T: Slugged> Collection<T> {
    fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            slug_index: HashMap::new(),
        }
    }

    fn insert(&mut self, record: T) -> Result<(), RegistryError> {
        let slug = record.slug();
        if self.slug_index.contains_key(slug) {
            return Err(RegistryError::DuplicateSlug {
                collection: self.kind,
                slug: slug.to_owned(),
            });
        }
        self.slug_index.insert(slug.to_owned(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Get the record stored under `slug`.
    ///
    /// `None` is an ordinary outcome; callers decide whether it is fatal.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&T> {
        self.slug_index.get(slug).map(|&i| &self.records[i])
    }

    /// All records in authoring order.
    #[must_use]
    pub fn list_all(&self) -> &[T] {
        &self.records
    }

    /// Whether a record is stored under `slug`.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.slug_index.contains_key(slug)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Immutable documentation registry.
///
/// Holds the component index, component docs, the getting-started list and
/// getting-started pages. Construct with [`Registry::builder`].
#[derive(Debug)]
pub struct Registry {
    index: Collection<ComponentIndexItem>,
    components: Collection<ComponentDoc>,
    getting_started: Collection<GettingStartedItem>,
    guides: Collection<PageSection>,
}

impl Registry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Master component index, in presentation order.
    #[must_use]
    pub fn index(&self) -> &Collection<ComponentIndexItem> {
        &self.index
    }

    /// Component docs.
    #[must_use]
    pub fn components(&self) -> &Collection<ComponentDoc> {
        &self.components
    }

    /// Getting-started list, the ordering authority for guide pages.
    #[must_use]
    pub fn getting_started(&self) -> &Collection<GettingStartedItem> {
        &self.getting_started
    }

    /// Getting-started pages.
    #[must_use]
    pub fn guides(&self) -> &Collection<PageSection> {
        &self.guides
    }
}

/// Builder for [`Registry`].
///
/// Rejects duplicate slugs and synthesizes component TOCs as docs are added.
#[derive(Debug)]
pub struct RegistryBuilder {
    index: Collection<ComponentIndexItem>,
    components: Collection<ComponentDoc>,
    getting_started: Collection<GettingStartedItem>,
    guides: Collection<PageSection>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            index: Collection::new(CollectionKind::ComponentIndex),
            components: Collection::new(CollectionKind::Components),
            getting_started: Collection::new(CollectionKind::GettingStarted),
            guides: Collection::new(CollectionKind::Guides),
        }
    }
}

impl RegistryBuilder {
    /// Append a component index entry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSlug` if the slug is already indexed.
    pub fn add_index_item(&mut self, item: ComponentIndexItem) -> Result<&mut Self, RegistryError> {
        self.index.insert(item)?;
        Ok(self)
    }

    /// Add a component doc, synthesizing its TOC.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSlug` if a doc with the slug exists.
    pub fn add_component(&mut self, source: ComponentDocSource) -> Result<&mut Self, RegistryError> {
        self.components.insert(source.into_doc())?;
        Ok(self)
    }

    /// Append a getting-started list entry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSlug` if the slug is already listed.
    pub fn add_getting_started(
        &mut self,
        item: GettingStartedItem,
    ) -> Result<&mut Self, RegistryError> {
        self.getting_started.insert(item)?;
        Ok(self)
    }

    /// Add a getting-started page.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateSlug` if a page with the slug exists.
    pub fn add_guide(&mut self, page: PageSection) -> Result<&mut Self, RegistryError> {
        self.guides.insert(page)?;
        Ok(self)
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Registry {
        tracing::debug!(
            indexed = self.index.len(),
            components = self.components.len(),
            getting_started = self.getting_started.len(),
            guides = self.guides.len(),
            "Registry built"
        );

        Registry {
            index: self.index,
            components: self.components,
            getting_started: self.getting_started,
            guides: self.guides,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // Registry is shared across request handlers behind Arc
    static_assertions::assert_impl_all!(super::Registry: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{ComponentMeta, HeadingLevel, PageMeta, TocItem};

    pub(crate) fn index_item(slug: &str, name: &str, category: &str) -> ComponentIndexItem {
        ComponentIndexItem {
            slug: slug.to_owned(),
            name: name.to_owned(),
            category: category.to_owned(),
            description: None,
            status: None,
            tags: Vec::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
        }
    }

    pub(crate) fn doc_source(slug: &str) -> ComponentDocSource {
        ComponentDocSource {
            slug: slug.to_owned(),
            meta: ComponentMeta {
                name: slug.to_owned(),
                description: String::new(),
                category: "Actions".to_owned(),
                status: None,
            },
            sections: Vec::new(),
            props: Vec::new(),
            examples: Vec::new(),
            toc: Vec::new(),
            showcase: crate::types::DocShowcase::default(),
        }
    }

    pub(crate) fn guide_item(slug: &str, title: &str) -> GettingStartedItem {
        GettingStartedItem {
            slug: slug.to_owned(),
            title: title.to_owned(),
            href: format!("/docs/{slug}"),
            description: None,
        }
    }

    fn guide_page(slug: &str) -> PageSection {
        PageSection {
            slug: slug.to_owned(),
            meta: PageMeta {
                name: slug.to_owned(),
                description: String::new(),
            },
            sections: Vec::new(),
            toc: None,
        }
    }

    #[test]
    fn test_get_by_slug_returns_inserted_record() {
        let mut builder = Registry::builder();
        let button = index_item("button", "Button", "Actions");
        let input = index_item("input", "Input", "Forms");
        builder
            .add_index_item(button.clone())
            .unwrap()
            .add_index_item(input.clone())
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.index().get_by_slug("button"), Some(&button));
        assert_eq!(registry.index().get_by_slug("input"), Some(&input));
    }

    #[test]
    fn test_get_by_slug_absent() {
        let mut builder = Registry::builder();
        builder.add_guide(guide_page("installation")).unwrap();
        let registry = builder.build();

        assert!(registry.guides().get_by_slug("theming").is_none());
        assert!(registry.components().get_by_slug("installation").is_none());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut builder = Registry::builder();
        for slug in ["zeta", "alpha", "mid"] {
            builder.add_getting_started(guide_item(slug, slug)).unwrap();
        }
        let registry = builder.build();

        let slugs: Vec<_> = registry
            .getting_started()
            .list_all()
            .iter()
            .map(|i| i.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut builder = Registry::builder();
        builder
            .add_index_item(index_item("button", "Button", "Actions"))
            .unwrap();

        let err = builder
            .add_index_item(index_item("button", "Other Button", "Forms"))
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateSlug {
                collection: CollectionKind::ComponentIndex,
                slug: "button".to_owned(),
            }
        );
        assert!(err.to_string().contains("component index"));
    }

    #[test]
    fn test_same_slug_allowed_across_collections() {
        let mut builder = Registry::builder();
        builder
            .add_index_item(index_item("button", "Button", "Actions"))
            .unwrap()
            .add_component(doc_source("button"))
            .unwrap();
        let registry = builder.build();

        assert!(registry.index().contains("button"));
        assert!(registry.components().contains("button"));
    }

    #[test]
    fn test_add_component_synthesizes_toc() {
        let mut source = doc_source("dialog");
        source.toc = vec![TocItem::new("examples", "Examples", HeadingLevel::H2)];
        source.examples = vec![crate::types::DocExample {
            id: "nested".to_owned(),
            title: "Nested".to_owned(),
            description: String::new(),
            source: String::new(),
            preview: crate::types::Renderable::default(),
        }];
        let mut builder = Registry::builder();
        builder.add_component(source).unwrap();
        let registry = builder.build();

        let doc = registry.components().get_by_slug("dialog").unwrap();
        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.toc[1].id, "nested");
    }
}
