//! Derived views over a dex content [`Registry`](dex_content::Registry).
//!
//! - [`adjacent`]: previous/next navigation within an ordered index
//! - [`sitemap_entries`] and [`to_xml`]: the sitemap
//! - [`render_llms_txt`]: the plain-text category feed
//!
//! All views are pure functions of the registry and their arguments.

mod adjacency;
mod llms;
mod sitemap;

pub use adjacency::{Adjacent, adjacent};
pub use llms::{FeedOptions, render_llms_txt};
pub use sitemap::{ChangeFrequency, SitemapEntry, SitemapError, sitemap_entries, to_xml};
