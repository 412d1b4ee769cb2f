//! Plain-text feed endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Handle GET /llms.txt.
///
/// The body is rendered once at startup; conditional requests matching the
/// `ETag` get 304 Not Modified.
pub(crate) async fn get_llms_txt(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == state.llms_etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
            (header::ETAG, state.llms_etag.clone()),
            (header::CACHE_CONTROL, "public, max-age=300".to_owned()),
        ],
        state.llms_txt.clone(),
    )
        .into_response()
}
