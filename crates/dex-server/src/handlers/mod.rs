//! HTTP request handlers.

pub(crate) mod components;
pub(crate) mod feed;
pub(crate) mod guides;
pub(crate) mod sitemap;

use serde::Serialize;

/// Link to a neighboring page.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct NavLink {
    /// Target slug.
    pub(crate) slug: String,
    /// Link text.
    pub(crate) title: String,
    /// Site-relative URL.
    pub(crate) href: String,
}
