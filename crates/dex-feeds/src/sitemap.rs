//! Sitemap entries and the sitemaps.org XML document.

use chrono::{DateTime, SecondsFormat, Utc};
use dex_content::Registry;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;

/// Namespace of the `<urlset>` element.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const HOME_PRIORITY: f64 = 1.0;
const LISTING_PRIORITY: f64 = 0.9;
const FEED_PRIORITY: f64 = 0.9;
const GUIDE_PRIORITY: f64 = 0.8;
const COMPONENT_PRIORITY: f64 = 0.7;

/// How often a page is expected to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Regenerated on every build.
    Daily,
    /// Changes with most releases.
    Weekly,
    /// Rarely changes.
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One sitemap entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// Expected change frequency.
    pub change_frequency: ChangeFrequency,
    /// Relative weight in `0.0..=1.0`.
    pub priority: f64,
}

/// Error rendering the XML document.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write sitemap XML: {0}")]
pub struct SitemapError(String);

/// Build the entries for every page the site serves.
///
/// Static routes come first (home, component listing, feed), followed by
/// getting-started pages in list order and component docs in index order.
/// Indexed components without a doc have no page and are left out.
/// `base_url` must not end with `/`.
#[must_use]
pub fn sitemap_entries(
    registry: &Registry,
    base_url: &str,
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let entry = |url: String, change_frequency, priority| SitemapEntry {
        url,
        last_modified,
        change_frequency,
        priority,
    };

    let mut entries = vec![
        entry(base_url.to_owned(), ChangeFrequency::Weekly, HOME_PRIORITY),
        entry(
            format!("{base_url}/docs/components"),
            ChangeFrequency::Weekly,
            LISTING_PRIORITY,
        ),
        entry(
            format!("{base_url}/llms.txt"),
            ChangeFrequency::Daily,
            FEED_PRIORITY,
        ),
    ];
    entries.extend(registry.getting_started().list_all().iter().map(|item| {
        entry(
            format!("{base_url}{}", item.href),
            ChangeFrequency::Monthly,
            GUIDE_PRIORITY,
        )
    }));
    let components = registry.components();
    entries.extend(
        registry
            .index()
            .list_all()
            .iter()
            .filter(|item| components.contains(&item.slug))
            .map(|item| {
                entry(
                    format!("{base_url}/docs/components/{}", item.slug),
                    ChangeFrequency::Monthly,
                    COMPONENT_PRIORITY,
                )
            }),
    );
    entries
}

/// Render entries as a sitemaps.org `<urlset>` document.
///
/// # Errors
///
/// Returns `SitemapError` if the XML writer fails.
pub fn to_xml(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)])),
    )?;
    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.url)?;
        text_element(
            &mut writer,
            "lastmod",
            &entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml =
        String::from_utf8(writer.into_inner()).map_err(|e| SitemapError(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SitemapError> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use dex_content::{
        ComponentDocSource, ComponentIndexItem, ComponentMeta, DocShowcase, GettingStartedItem,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn doc(slug: &str) -> ComponentDocSource {
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
            showcase: DocShowcase::default(),
        }
    }

    fn registry() -> Registry {
        let mut builder = Registry::builder();
        builder
            .add_index_item(ComponentIndexItem {
                slug: "button".to_owned(),
                name: "Button".to_owned(),
                category: "Actions".to_owned(),
                description: None,
                status: None,
                tags: Vec::new(),
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
                registry_dependencies: Vec::new(),
            })
            .unwrap()
            .add_component(doc("button"))
            .unwrap()
            .add_getting_started(GettingStartedItem {
                slug: "introduction".to_owned(),
                title: "Introduction".to_owned(),
                href: "/docs/introduction".to_owned(),
                description: None,
            })
            .unwrap();
        builder.build()
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_entries_cover_static_routes_and_records() {
        let entries = sitemap_entries(&registry(), "https://example.test", timestamp());

        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://example.test",
                "https://example.test/docs/components",
                "https://example.test/llms.txt",
                "https://example.test/docs/introduction",
                "https://example.test/docs/components/button",
            ]
        );
        assert!(entries.iter().all(|e| e.last_modified == timestamp()));
    }

    #[test]
    fn test_indexed_component_without_doc_is_skipped() {
        let mut builder = Registry::builder();
        for slug in ["button", "toggle"] {
            builder
                .add_index_item(ComponentIndexItem {
                    slug: slug.to_owned(),
                    name: slug.to_owned(),
                    category: "Actions".to_owned(),
                    description: None,
                    status: None,
                    tags: Vec::new(),
                    dependencies: Vec::new(),
                    dev_dependencies: Vec::new(),
                    registry_dependencies: Vec::new(),
                })
                .unwrap();
        }
        builder.add_component(doc("toggle")).unwrap();

        let entries = sitemap_entries(&builder.build(), "https://example.test", timestamp());

        let components: Vec<_> = entries
            .iter()
            .filter(|e| e.url.contains("/docs/components/"))
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(components, vec!["https://example.test/docs/components/toggle"]);
    }

    #[test]
    fn test_priority_ordering_by_class() {
        let entries = sitemap_entries(&registry(), "https://example.test", timestamp());
        let [home, listing, feed, guide, component] = entries.as_slice() else {
            panic!("expected five entries, got {}", entries.len());
        };

        assert!(home.priority > listing.priority);
        assert!((listing.priority - feed.priority).abs() < f64::EPSILON);
        assert!(feed.priority > guide.priority);
        assert!(guide.priority > component.priority);
        assert_eq!(feed.change_frequency, ChangeFrequency::Daily);
        assert_eq!(component.change_frequency, ChangeFrequency::Monthly);
    }

    #[test]
    fn test_entry_json_shape() {
        let entries = sitemap_entries(&registry(), "https://example.test", timestamp());

        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["url"], "https://example.test");
        assert_eq!(json["changeFrequency"], "weekly");
        assert_eq!(json["priority"], 1.0);
        assert_eq!(json["lastModified"], "2026-01-15T08:30:00Z");
    }

    #[test]
    fn test_to_xml_document() {
        let entries = sitemap_entries(&registry(), "https://example.test", timestamp());

        let xml = to_xml(&entries).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(&format!("<urlset xmlns=\"{SITEMAP_NS}\">")));
        assert!(xml.contains("<loc>https://example.test/docs/components/button</loc>"));
        assert!(xml.contains("<lastmod>2026-01-15T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_to_xml_escapes_urls() {
        let entries = vec![SitemapEntry {
            url: "https://example.test/search?q=a&b=c".to_owned(),
            last_modified: timestamp(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.5,
        }];

        let xml = to_xml(&entries).unwrap();

        assert!(xml.contains("<loc>https://example.test/search?q=a&amp;b=c</loc>"));
    }
}
