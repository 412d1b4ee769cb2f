//! Previous/next navigation within an ordered index.

use dex_content::Slugged;
use serde::Serialize;

/// Neighbors of a record in an ordered index.
#[derive(Debug, PartialEq, Serialize)]
pub struct Adjacent<'a, T> {
    /// Record before the current one.
    pub previous: Option<&'a T>,
    /// Record after the current one.
    pub next: Option<&'a T>,
}

impl<T> Adjacent<'_, T> {
    /// No neighbors.
    #[must_use]
    pub fn none() -> Self {
        Self {
            previous: None,
            next: None,
        }
    }
}

/// Find the neighbors of `slug` in `items`.
///
/// An unknown slug yields no neighbors rather than an error.
///
/// # Examples
///
/// ```
/// use dex_content::GettingStartedItem;
/// use dex_feeds::adjacent;
///
/// let items: Vec<GettingStartedItem> = Vec::new();
/// let nav = adjacent(&items, "introduction");
/// assert!(nav.previous.is_none() && nav.next.is_none());
/// ```
#[must_use]
pub fn adjacent<'a, T: Slugged>(items: &'a [T], slug: &str) -> Adjacent<'a, T> {
    let Some(pos) = items.iter().position(|item| item.slug() == slug) else {
        return Adjacent::none();
    };
    Adjacent {
        previous: pos.checked_sub(1).and_then(|i| items.get(i)),
        next: items.get(pos + 1),
    }
}
