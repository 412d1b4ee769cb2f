//! Component index summaries and category grouping.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{ComponentIndexItem, ComponentStatus};

/// Lightweight listing entry for a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    /// URL-safe identifier.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: String,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,
}

impl From<&ComponentIndexItem> for ComponentSummary {
    fn from(item: &ComponentIndexItem) -> Self {
        Self {
            slug: item.slug.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            tags: item.tags.clone(),
            status: item.status,
        }
    }
}

/// Summarize the index without touching full doc content.
#[must_use]
pub fn summarize(items: &[ComponentIndexItem]) -> Vec<ComponentSummary> {
    items.iter().map(ComponentSummary::from).collect()
}

/// Components sharing one category.
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// Category name.
    pub name: &'a str,
    /// Members in master index order.
    pub items: Vec<&'a ComponentIndexItem>,
}

/// Group index items by category.
///
/// Members keep their relative index order. Categories named in `priority`
/// come first, in that order; the remaining categories follow in the order
/// they first appear in `items`. Priority names without members are skipped.
///
/// # Examples
///
/// ```
/// use dex_content::group_by_category;
///
/// let groups = group_by_category(&[], &["Actions"]);
/// assert!(groups.is_empty());
/// ```
#[must_use]
pub fn group_by_category<'a, S: AsRef<str>>(
    items: &'a [ComponentIndexItem],
    priority: &[S],
) -> Vec<CategoryGroup<'a>> {
    // Discovery order first; priority is applied when draining.
    let mut discovered: Vec<Option<CategoryGroup<'a>>> = Vec::new();
    let mut position: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        let name = item.category.as_str();
        let idx = *position.entry(name).or_insert_with(|| {
            discovered.push(Some(CategoryGroup {
                name,
                items: Vec::new(),
            }));
            discovered.len() - 1
        });
        if let Some(group) = discovered[idx].as_mut() {
            group.items.push(item);
        }
    }

    let mut ordered = Vec::with_capacity(discovered.len());
    for name in priority {
        if let Some(&idx) = position.get(name.as_ref())
            && let Some(group) = discovered[idx].take()
        {
            ordered.push(group);
        }
    }
    ordered.extend(discovered.into_iter().flatten());
    ordered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::tests::index_item;

    fn names<'a>(groups: &[CategoryGroup<'a>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.name).collect()
    }

    #[test]
    fn test_priority_then_discovery_order() {
        let items = vec![
            index_item("input", "Input", "Forms"),
            index_item("button", "Button", "Actions"),
            index_item("widget", "Widget", "Zeta"),
        ];

        let groups = group_by_category(&items, &["Actions", "Forms"]);

        assert_eq!(names(&groups), vec!["Actions", "Forms", "Zeta"]);
    }

    #[test]
    fn test_unlisted_categories_not_alphabetical() {
        let items = vec![
            index_item("z", "Z", "Zeta"),
            index_item("a", "A", "Alpha"),
            index_item("m", "M", "Mu"),
        ];

        let groups = group_by_category(&items, &[] as &[&str]);

        assert_eq!(names(&groups), vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_members_keep_index_order() {
        let items = vec![
            index_item("toggle", "Toggle", "Actions"),
            index_item("input", "Input", "Forms"),
            index_item("button", "Button", "Actions"),
        ];

        let groups = group_by_category(&items, &["Actions"]);

        let actions: Vec<_> = groups[0].items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(actions, vec!["toggle", "button"]);
    }

    #[test]
    fn test_empty_priority_categories_skipped() {
        let items = vec![index_item("button", "Button", "Actions")];

        let groups = group_by_category(&items, &["Layout", "Actions", "Layout"]);

        assert_eq!(names(&groups), vec!["Actions"]);
    }

    #[test]
    fn test_summarize_keeps_listing_fields() {
        let mut item = index_item("button", "Button", "Actions");
        item.tags = vec!["click".to_owned()];
        item.status = Some(ComponentStatus::Stable);
        item.description = Some("Not part of the summary".to_owned());

        let summaries = summarize(std::slice::from_ref(&item));

        assert_eq!(
            summaries,
            vec![ComponentSummary {
                slug: "button".to_owned(),
                name: "Button".to_owned(),
                category: "Actions".to_owned(),
                tags: vec!["click".to_owned()],
                status: Some(ComponentStatus::Stable),
            }]
        );
    }
}
