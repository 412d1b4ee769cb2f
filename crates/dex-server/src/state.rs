//! Application state.
//!
//! Shared state for all request handlers. Everything here is computed once
//! at startup; the registry never changes while serving.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dex_content::Registry;
use dex_feeds::{FeedOptions, render_llms_txt};
use md5::{Digest, Md5};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content registry.
    pub(crate) registry: Arc<Registry>,
    /// Absolute base URL without trailing slash.
    pub(crate) base_url: String,
    /// Preferred category order for listings.
    pub(crate) category_order: Vec<String>,
    /// Pre-rendered `llms.txt` body.
    pub(crate) llms_txt: String,
    /// `ETag` of `llms_txt`.
    pub(crate) llms_etag: String,
    /// Timestamp reported as sitemap `lastmod`.
    pub(crate) started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state, rendering the feed up front.
    pub(crate) fn new(
        registry: Arc<Registry>,
        base_url: String,
        feed: &FeedOptions,
        version: &str,
    ) -> Self {
        let llms_txt = render_llms_txt(&registry, &base_url, feed);
        let llms_etag = compute_etag(version, &llms_txt);
        Self {
            registry,
            base_url,
            category_order: feed.category_order.clone(),
            llms_txt,
            llms_etag,
            started_at: Utc::now(),
        }
    }
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
