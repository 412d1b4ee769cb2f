//! Getting-started API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use dex_content::{GettingStartedItem, PageSection, TocItem};
use dex_feeds::adjacent;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::NavLink;
use crate::state::AppState;

/// Response for GET /api/getting-started.
#[derive(Serialize)]
struct GuideListResponse<'a> {
    /// Entries in navigation order.
    items: &'a [GettingStartedItem],
}

/// Response for GET /api/getting-started/{slug}.
#[derive(Serialize)]
struct GuideResponse<'a> {
    /// Page record.
    page: &'a PageSection,
    /// Authored TOC, or one derived from the sections.
    toc: &'a [TocItem],
    /// Previous entry of the getting-started list.
    previous: Option<NavLink>,
    /// Next entry of the getting-started list.
    next: Option<NavLink>,
}

impl From<&GettingStartedItem> for NavLink {
    fn from(item: &GettingStartedItem) -> Self {
        Self {
            slug: item.slug.clone(),
            title: item.title.clone(),
            href: item.href.clone(),
        }
    }
}

/// Handle GET /api/getting-started.
pub(crate) async fn list_guides(State(state): State<Arc<AppState>>) -> Response {
    Json(GuideListResponse {
        items: state.registry.getting_started().list_all(),
    })
    .into_response()
}

/// Handle GET /api/getting-started/{slug}.
pub(crate) async fn get_guide(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let page = state
        .registry
        .guides()
        .get_by_slug(&slug)
        .ok_or_else(|| ServerError::PageNotFound(slug.clone()))?;
    let toc = page.toc_or_derived();
    let nav = adjacent(state.registry.getting_started().list_all(), &slug);

    Ok(Json(GuideResponse {
        page,
        toc: &toc,
        previous: nav.previous.map(NavLink::from),
        next: nav.next.map(NavLink::from),
    })
    .into_response())
}
