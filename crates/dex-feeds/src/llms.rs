//! Plain-text category feed (`llms.txt`).
//!
//! The output is consumed by crawlers and LLM ingestion, so its layout is a
//! compatibility contract: same registry and options, same bytes.

use dex_content::{Registry, group_by_category};

/// Feed text that does not come from the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    /// Document heading.
    pub title: String,
    /// Quoted preamble under the heading.
    pub summary: String,
    /// Trailing text of the component listing link.
    pub components_blurb: String,
    /// Preferred category order.
    pub category_order: Vec<String>,
}

/// Render the feed.
///
/// Getting-started links come first in list order, followed by a link to the
/// component listing, then one section per category. A getting-started link
/// is followed by the item's own description, or else by the description of
/// the guide page with the same slug. With neither, the `: ` suffix is left
/// out. Lines are joined with
/// `\n` and the document ends with a single newline. `base_url` must not end
/// with `/`.
#[must_use]
pub fn render_llms_txt(registry: &Registry, base_url: &str, options: &FeedOptions) -> String {
    let mut lines = vec![
        format!("# {}", options.title),
        String::new(),
        format!("> {}", options.summary),
        String::new(),
        "## Getting Started".to_owned(),
        String::new(),
    ];

    for item in registry.getting_started().list_all() {
        let description = item
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                registry
                    .guides()
                    .get_by_slug(&item.slug)
                    .map(|page| page.meta.description.as_str())
            });
        lines.push(link(
            &item.title,
            &format!("{base_url}{}", item.href),
            description,
        ));
    }
    lines.push(link(
        "Components",
        &format!("{base_url}/docs/components"),
        Some(options.components_blurb.as_str()),
    ));

    lines.push(String::new());
    lines.push("## Components".to_owned());

    let groups = group_by_category(registry.index().list_all(), &options.category_order);
    for group in &groups {
        lines.push(String::new());
        lines.push(format!("### {}", group.name));
        lines.push(String::new());
        for item in &group.items {
            lines.push(link(
                &item.name,
                &format!("{base_url}/docs/components/{}", item.slug),
                item.description.as_deref(),
            ));
        }
    }

    tracing::debug!(
        guides = registry.getting_started().len(),
        categories = groups.len(),
        "Rendered llms.txt"
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Format a list item link with an optional `: description` suffix.
fn link(title: &str, url: &str, description: Option<&str>) -> String {
    let mut line = format!("- [{title}]({url})");
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        line.push_str(": ");
        line.push_str(description);
    }
    line
}
