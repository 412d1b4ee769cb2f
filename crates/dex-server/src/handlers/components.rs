//! Component API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use dex_content::{
    ComponentDoc, ComponentIndexItem, ComponentSummary, group_by_category, summarize,
};
use dex_feeds::adjacent;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::NavLink;
use crate::state::AppState;

/// Response for GET /api/components.
#[derive(Serialize)]
pub(crate) struct ComponentListResponse {
    /// Components in index order.
    components: Vec<ComponentSummary>,
    /// Category sections in listing order.
    categories: Vec<CategoryResponse>,
}

/// One category section of the listing.
#[derive(Serialize)]
struct CategoryResponse {
    /// Category name.
    name: String,
    /// Member slugs in index order.
    slugs: Vec<String>,
}

/// Response for GET /api/components/{slug}.
#[derive(Serialize)]
struct ComponentResponse<'a> {
    /// Full doc with synthesized TOC.
    doc: &'a ComponentDoc,
    /// Previous component in the index.
    previous: Option<NavLink>,
    /// Next component in the index.
    next: Option<NavLink>,
}

impl From<&ComponentIndexItem> for NavLink {
    fn from(item: &ComponentIndexItem) -> Self {
        Self {
            slug: item.slug.clone(),
            title: item.name.clone(),
            href: format!("/docs/components/{}", item.slug),
        }
    }
}

/// Handle GET /api/components.
pub(crate) async fn list_components(
    State(state): State<Arc<AppState>>,
) -> Json<ComponentListResponse> {
    let index = state.registry.index().list_all();
    let categories = group_by_category(index, &state.category_order)
        .into_iter()
        .map(|group| CategoryResponse {
            name: group.name.to_owned(),
            slugs: group.items.iter().map(|item| item.slug.clone()).collect(),
        })
        .collect();

    Json(ComponentListResponse {
        components: summarize(index),
        categories,
    })
}

/// Handle GET /api/components/{slug}.
pub(crate) async fn get_component(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let doc = state
        .registry
        .components()
        .get_by_slug(&slug)
        .ok_or_else(|| ServerError::ComponentNotFound(slug.clone()))?;
    let nav = adjacent(state.registry.index().list_all(), &slug);

    Ok(Json(ComponentResponse {
        doc,
        previous: nav.previous.map(NavLink::from),
        next: nav.next.map(NavLink::from),
    })
    .into_response())
}
