//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dex_feeds::SitemapError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No component doc under the slug.
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// No getting-started page under the slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Sitemap document could not be rendered.
    #[error(transparent)]
    Sitemap(#[from] SitemapError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::ComponentNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Component not found", "slug": slug}),
            ),
            Self::PageNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "slug": slug}),
            ),
            Self::Sitemap(e) => {
                tracing::error!(error = %e, "Sitemap rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
