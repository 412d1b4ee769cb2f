//! Authoring checks.
//!
//! Malformed content is inert at render time (a dangling TOC entry simply
//! links nowhere), so defects are collected here and surfaced by `dex check`
//! and the test suite instead of being guarded against while serving.

use std::collections::HashSet;
use std::fmt;

use crate::registry::Registry;
use crate::slug::slugify;
use crate::toc::EXAMPLES_MARKER;
use crate::types::{ComponentDoc, PageSection, TocItem};

/// A content defect found by [`check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    /// A slug is not in its canonical slug form.
    InvalidSlug {
        /// The slug as authored.
        slug: String,
    },
    /// A component doc has no index entry.
    UnindexedComponent {
        /// Doc slug.
        slug: String,
    },
    /// An index entry has no component doc.
    MissingComponentDoc {
        /// Index slug.
        slug: String,
    },
    /// A getting-started entry has no page.
    MissingGuidePage {
        /// Entry slug.
        slug: String,
    },
    /// Two sections or examples of one doc share an id.
    DuplicateAnchor {
        /// Doc slug.
        slug: String,
        /// Repeated id.
        id: String,
    },
    /// A TOC entry points at no section or example.
    DanglingTocEntry {
        /// Doc slug.
        slug: String,
        /// Unmatched id.
        id: String,
    },
    /// A doc has examples but its TOC lacks the examples marker.
    MissingExamplesMarker {
        /// Doc slug.
        slug: String,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlug { slug } => {
                write!(f, "'{slug}' is not a valid slug (expected '{}')", slugify(slug))
            }
            Self::UnindexedComponent { slug } => {
                write!(f, "component doc '{slug}' has no index entry")
            }
            Self::MissingComponentDoc { slug } => {
                write!(f, "index entry '{slug}' has no component doc")
            }
            Self::MissingGuidePage { slug } => {
                write!(f, "getting-started entry '{slug}' has no page")
            }
            Self::DuplicateAnchor { slug, id } => {
                write!(f, "'{slug}': anchor id '{id}' is used more than once")
            }
            Self::DanglingTocEntry { slug, id } => {
                write!(f, "'{slug}': TOC entry '{id}' matches no section or example")
            }
            Self::MissingExamplesMarker { slug } => write!(
                f,
                "'{slug}': has examples but no '{EXAMPLES_MARKER}' TOC entry, examples get no anchors"
            ),
        }
    }
}

/// Collect every content defect in the registry.
///
/// Issues are reported in a stable order: slugs, cross references, then
/// per-doc anchor checks in index order.
#[must_use]
pub fn check(registry: &Registry) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let all_slugs = registry
        .index()
        .list_all()
        .iter()
        .map(|i| &i.slug)
        .chain(registry.components().list_all().iter().map(|d| &d.slug))
        .chain(registry.getting_started().list_all().iter().map(|i| &i.slug))
        .chain(registry.guides().list_all().iter().map(|p| &p.slug));
    let mut seen = HashSet::new();
    for slug in all_slugs {
        if seen.insert(slug.as_str()) && slugify(slug) != *slug {
            issues.push(ContentIssue::InvalidSlug { slug: slug.clone() });
        }
    }

    for doc in registry.components().list_all() {
        if !registry.index().contains(&doc.slug) {
            issues.push(ContentIssue::UnindexedComponent {
                slug: doc.slug.clone(),
            });
        }
    }
    for item in registry.index().list_all() {
        if !registry.components().contains(&item.slug) {
            issues.push(ContentIssue::MissingComponentDoc {
                slug: item.slug.clone(),
            });
        }
    }
    for item in registry.getting_started().list_all() {
        if !registry.guides().contains(&item.slug) {
            issues.push(ContentIssue::MissingGuidePage {
                slug: item.slug.clone(),
            });
        }
    }

    for doc in registry.components().list_all() {
        check_component(doc, &mut issues);
    }
    for page in registry.guides().list_all() {
        check_guide(page, &mut issues);
    }

    issues
}

fn check_component(doc: &ComponentDoc, issues: &mut Vec<ContentIssue>) {
    let anchors = doc
        .sections
        .iter()
        .map(|s| s.id.as_str())
        .chain(doc.examples.iter().map(|e| e.id.as_str()));
    let known = collect_anchors(&doc.slug, anchors, issues);

    // The marker itself is a TOC heading, not a section.
    check_toc(&doc.slug, &doc.toc, &known, Some(EXAMPLES_MARKER), issues);

    if !doc.examples.is_empty() && !doc.toc.iter().any(|t| t.id == EXAMPLES_MARKER) {
        issues.push(ContentIssue::MissingExamplesMarker {
            slug: doc.slug.clone(),
        });
    }
}

fn check_guide(page: &PageSection, issues: &mut Vec<ContentIssue>) {
    let known = collect_anchors(
        &page.slug,
        page.sections.iter().map(|s| s.id.as_str()),
        issues,
    );
    if let Some(toc) = &page.toc {
        check_toc(&page.slug, toc, &known, None, issues);
    }
}

fn collect_anchors<'a>(
    slug: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<ContentIssue>,
) -> HashSet<&'a str> {
    let mut known = HashSet::new();
    for id in ids {
        if !known.insert(id) {
            issues.push(ContentIssue::DuplicateAnchor {
                slug: slug.to_owned(),
                id: id.to_owned(),
            });
        }
    }
    known
}

fn check_toc(
    slug: &str,
    toc: &[TocItem],
    known: &HashSet<&str>,
    allowed: Option<&str>,
    issues: &mut Vec<ContentIssue>,
) {
    for item in toc {
        if Some(item.id.as_str()) == allowed || known.contains(item.id.as_str()) {
            continue;
        }
        issues.push(ContentIssue::DanglingTocEntry {
            slug: slug.to_owned(),
            id: item.id.clone(),
        });
    }
}
