//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::headers::security_headers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/components", get(handlers::components::list_components))
        .route(
            "/api/components/{slug}",
            get(handlers::components::get_component),
        )
        .route("/api/getting-started", get(handlers::guides::list_guides))
        .route(
            "/api/getting-started/{slug}",
            get(handlers::guides::get_guide),
        )
        .route("/api/sitemap", get(handlers::sitemap::get_sitemap_json));

    let feed_routes = Router::new()
        .route("/llms.txt", get(handlers::feed::get_llms_txt))
        .route("/sitemap.xml", get(handlers::sitemap::get_sitemap_xml));

    Router::new()
        .merge(api_routes)
        .merge(feed_routes)
        .layer(security_headers())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
