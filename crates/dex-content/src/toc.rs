//! Table of contents synthesis.
//!
//! Two paths produce a [`TocItem`] list:
//! - [`inject_examples`] splices a component's examples into its authored TOC
//!   right after the `examples` marker entry.
//! - [`toc_from_markdown`] derives a TOC from `##`/`###` heading lines of
//!   plain markdown text.

use std::sync::LazyLock;

use regex::Regex;

use crate::slug::slugify;
use crate::types::{DocExample, HeadingLevel, TocItem};

/// Id of the authored TOC entry that examples are inserted after.
pub const EXAMPLES_MARKER: &str = "examples";

/// Matches a level 2 or 3 ATX heading line. Code fences are not tracked.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,3}) +(.+)$").expect("invalid heading regex"));

/// Build a component TOC by inserting one level-3 entry per example after
/// the [`EXAMPLES_MARKER`] entry.
///
/// Examples keep their order. Only the first marker is used. Without a
/// marker the authored TOC is returned as-is and no example gets an entry.
///
/// # Examples
///
/// ```
/// use dex_content::{HeadingLevel, TocItem, inject_examples};
///
/// let toc = vec![
///     TocItem::new("usage", "Usage", HeadingLevel::H2),
///     TocItem::new("examples", "Examples", HeadingLevel::H2),
///     TocItem::new("props", "Props", HeadingLevel::H2),
/// ];
/// let result = inject_examples(&toc, &[]);
/// assert_eq!(result, toc);
/// ```
#[must_use]
pub fn inject_examples(toc: &[TocItem], examples: &[DocExample]) -> Vec<TocItem> {
    let Some(marker) = toc.iter().position(|item| item.id == EXAMPLES_MARKER) else {
        return toc.to_vec();
    };

    let mut result = Vec::with_capacity(toc.len() + examples.len());
    result.extend_from_slice(&toc[..=marker]);
    result.extend(
        examples
            .iter()
            .map(|example| TocItem::new(&example.id, &example.title, HeadingLevel::H3)),
    );
    result.extend_from_slice(&toc[marker + 1..]);
    result
}

/// Derive a TOC from markdown heading lines.
///
/// A line of two or three `#`, at least one space, then text yields an entry
/// whose level is the hash count and whose id is the slug of the trimmed
/// text. Other heading depths are ignored. Lines inside fenced code blocks
/// are treated like any other line.
///
/// Lines whose title or slug comes out empty are skipped.
#[must_use]
pub fn toc_from_markdown(text: &str) -> Vec<TocItem> {
    text.lines()
        .filter_map(|line| {
            let caps = HEADING_RE.captures(line.trim_end_matches('\r'))?;
            let level = match caps[1].len() {
                2 => HeadingLevel::H2,
                _ => HeadingLevel::H3,
            };
            let title = caps[2].trim();
            let id = slugify(title);
            if title.is_empty() || id.is_empty() {
                return None;
            }
            Some(TocItem {
                id,
                title: title.to_owned(),
                level,
            })
        })
        .collect()
}
