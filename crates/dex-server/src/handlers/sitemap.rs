//! Sitemap endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use dex_feeds::{SitemapEntry, sitemap_entries, to_xml};

use crate::error::ServerError;
use crate::state::AppState;

fn entries(state: &AppState) -> Vec<SitemapEntry> {
    sitemap_entries(&state.registry, &state.base_url, state.started_at)
}

/// Handle GET /sitemap.xml.
pub(crate) async fn get_sitemap_xml(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let xml = to_xml(&entries(&state))?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

/// Handle GET /api/sitemap.
pub(crate) async fn get_sitemap_json(State(state): State<Arc<AppState>>) -> Json<Vec<SitemapEntry>> {
    Json(entries(&state))
}
