//! Documentation record types.
//!
//! Records are authored once (see [`load_registry`](crate::load_registry))
//! and never mutated afterwards. Renderable fields hold a [`Renderable`]
//! handle that this crate carries through without interpreting.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::toc::inject_examples;

/// Heading depth of a section or TOC entry. Only two depths are modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    /// Top-level section (`<h2>`).
    H2,
    /// Nested section (`<h3>`).
    H3,
}

/// Error for heading levels other than 2 or 3.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be 2 or 3, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Opaque renderable content (preview markup, section body).
///
/// The rendering layer decides what the raw text means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Renderable(String);

impl Renderable {
    /// Wrap raw content.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw content for the rendering layer.
    #[must_use]
    pub fn as_raw(&self) -> &str {
        &self.0
    }
}

/// Lifecycle status of a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// API may still change.
    Beta,
    /// Stable API.
    Stable,
    /// Scheduled for removal.
    Deprecated,
}

/// Summary record of one component in the master index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentIndexItem {
    /// URL-safe identifier, unique within the index.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Free-form category used for grouping.
    pub category: String,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
    /// Search and filter tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Runtime package dependencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Development-only package dependencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dev_dependencies: Vec<String>,
    /// Other components this one is built on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
}

/// Metadata block of a component doc.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Category, mirrors the index entry.
    pub category: String,
    /// Lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
}

/// One section of a doc page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    /// Anchor id, unique within the doc.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading depth.
    pub level: HeadingLevel,
    /// Optional lead paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Section body.
    #[serde(default)]
    pub content: Renderable,
}

/// One documented property of a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocProp {
    /// Prop name.
    pub name: String,
    /// Type expression as shown to readers.
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Default value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// What the prop does.
    #[serde(default)]
    pub description: String,
    /// Whether the prop must be supplied.
    #[serde(default)]
    pub required: bool,
}

/// A live example with its literal source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocExample {
    /// Anchor id.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// What the example shows.
    #[serde(default)]
    pub description: String,
    /// Literal source text.
    pub source: String,
    /// Rendered preview.
    #[serde(default)]
    pub preview: Renderable,
}

/// The hero preview of a component page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocShowcase {
    /// Rendered preview.
    #[serde(default)]
    pub preview: Renderable,
    /// Literal source text.
    #[serde(default)]
    pub source: String,
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TocItem {
    /// Target anchor id.
    pub id: String,
    /// Entry text.
    pub title: String,
    /// Nesting depth.
    pub level: HeadingLevel,
}

impl TocItem {
    /// Create a TOC entry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
        }
    }
}

/// A component doc as authored, before TOC synthesis.
#[derive(Clone, Debug, Deserialize)]
pub struct ComponentDocSource {
    /// Must match a [`ComponentIndexItem::slug`].
    pub slug: String,
    /// Metadata block.
    pub meta: ComponentMeta,
    /// Sections in reading order.
    #[serde(default)]
    pub sections: Vec<DocSection>,
    /// Documented props.
    #[serde(default)]
    pub props: Vec<DocProp>,
    /// Examples in reading order.
    #[serde(default)]
    pub examples: Vec<DocExample>,
    /// Hand-ordered TOC; may contain the `examples` marker.
    #[serde(default)]
    pub toc: Vec<TocItem>,
    /// Hero preview.
    #[serde(default)]
    pub showcase: DocShowcase,
}

impl ComponentDocSource {
    /// Finish the doc by synthesizing its TOC.
    #[must_use]
    pub fn into_doc(self) -> ComponentDoc {
        let toc = inject_examples(&self.toc, &self.examples);
        ComponentDoc {
            slug: self.slug,
            meta: self.meta,
            sections: self.sections,
            props: self.props,
            examples: self.examples,
            toc,
            showcase: self.showcase,
        }
    }
}

/// Full documentation record of one component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentDoc {
    /// Matches a [`ComponentIndexItem::slug`].
    pub slug: String,
    /// Metadata block.
    pub meta: ComponentMeta,
    /// Sections in reading order.
    pub sections: Vec<DocSection>,
    /// Documented props.
    pub props: Vec<DocProp>,
    /// Examples in reading order.
    pub examples: Vec<DocExample>,
    /// Synthesized TOC (authored entries plus injected examples).
    pub toc: Vec<TocItem>,
    /// Hero preview.
    pub showcase: DocShowcase,
}

/// Metadata block of a getting-started page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

/// A getting-started page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    /// Matches a [`GettingStartedItem::slug`].
    pub slug: String,
    /// Metadata block.
    pub meta: PageMeta,
    /// Sections in reading order.
    #[serde(default)]
    pub sections: Vec<DocSection>,
    /// Authored TOC. Used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc: Option<Vec<TocItem>>,
}

impl PageSection {
    /// Authored TOC, or one derived from the sections when none was authored.
    #[must_use]
    pub fn toc_or_derived(&self) -> Cow<'_, [TocItem]> {
        match &self.toc {
            Some(toc) => Cow::Borrowed(toc),
            None => Cow::Owned(
                self.sections
                    .iter()
                    .map(|s| TocItem::new(&s.id, &s.title, s.level))
                    .collect(),
            ),
        }
    }
}

/// Entry of the manually ordered getting-started list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GettingStartedItem {
    /// URL-safe identifier.
    pub slug: String,
    /// Link text.
    pub title: String,
    /// Site-relative link target (e.g. `/docs/introduction`).
    pub href: String,
    /// Trailing text in the plain-text feed. When absent the feed uses the
    /// description of the guide page with the same slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_level_from_number() {
        assert_eq!(HeadingLevel::try_from(2), Ok(HeadingLevel::H2));
        assert_eq!(HeadingLevel::try_from(3), Ok(HeadingLevel::H3));
        assert_eq!(HeadingLevel::try_from(4), Err(InvalidHeadingLevel(4)));
        assert_eq!(HeadingLevel::try_from(1), Err(InvalidHeadingLevel(1)));
    }

    #[test]
    fn test_heading_level_serializes_as_number() {
        let item = TocItem::new("intro", "Intro", HeadingLevel::H3);

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["level"], 3);
    }

    #[test]
    fn test_heading_level_rejects_deeper_nesting() {
        let err = serde_yaml::from_str::<TocItem>("id: a\ntitle: A\nlevel: 4").unwrap_err();

        assert!(err.to_string().contains("heading level must be 2 or 3"));
    }

    #[test]
    fn test_status_lowercase() {
        let item: ComponentIndexItem =
            serde_yaml::from_str("slug: b\nname: B\ncategory: Actions\nstatus: deprecated")
                .unwrap();

        assert_eq!(item.status, Some(ComponentStatus::Deprecated));
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_renderable_is_transparent() {
        let section: DocSection =
            serde_yaml::from_str("id: a\ntitle: A\nlevel: 2\ncontent: \"<p>Hi</p>\"").unwrap();

        assert_eq!(section.content.as_raw(), "<p>Hi</p>");
        assert_eq!(serde_json::to_value(&section).unwrap()["content"], "<p>Hi</p>");
    }

    #[test]
    fn test_into_doc_synthesizes_toc() {
        let source: ComponentDocSource = serde_yaml::from_str(
            r"
slug: button
meta:
  name: Button
  description: Triggers an action.
  category: Actions
toc:
  - { id: examples, title: Examples, level: 2 }
examples:
  - { id: ghost, title: Ghost, source: '<Button variant=ghost />' }
",
        )
        .unwrap();

        let doc = source.into_doc();

        assert_eq!(
            doc.toc,
            vec![
                TocItem::new("examples", "Examples", HeadingLevel::H2),
                TocItem::new("ghost", "Ghost", HeadingLevel::H3),
            ]
        );
    }

    #[test]
    fn test_page_toc_authored_wins() {
        let page = PageSection {
            slug: "installation".to_owned(),
            meta: PageMeta {
                name: "Installation".to_owned(),
                description: String::new(),
            },
            sections: vec![DocSection {
                id: "cli".to_owned(),
                title: "CLI".to_owned(),
                level: HeadingLevel::H2,
                description: None,
                content: Renderable::default(),
            }],
            toc: Some(vec![TocItem::new("manual", "Manual", HeadingLevel::H2)]),
        };

        assert_eq!(page.toc_or_derived()[0].id, "manual");

        let derived = PageSection { toc: None, ..page };
        assert_eq!(
            derived.toc_or_derived().into_owned(),
            vec![TocItem::new("cli", "CLI", HeadingLevel::H2)]
        );
    }
}
