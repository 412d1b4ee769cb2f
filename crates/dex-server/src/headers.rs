//! Response header middleware.
//!
//! Every response carries:
//! - X-Content-Type-Options: nosniff
//! - X-Frame-Options: DENY
//! - Referrer-Policy: strict-origin-when-cross-origin

use axum::http::HeaderValue;
use axum::http::header::{HeaderName, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;

type HeaderLayer = SetResponseHeaderLayer<HeaderValue>;

/// Layer stack adding the security headers.
pub(crate) type SecurityHeaders =
    ServiceBuilder<Stack<HeaderLayer, Stack<HeaderLayer, Stack<HeaderLayer, Identity>>>>;

fn overriding(name: HeaderName, value: &'static str) -> HeaderLayer {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Build the security header layers.
pub(crate) fn security_headers() -> SecurityHeaders {
    ServiceBuilder::new()
        .layer(overriding(X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(overriding(X_FRAME_OPTIONS, "DENY"))
        .layer(overriding(
            REFERRER_POLICY,
            "strict-origin-when-cross-origin",
        ))
}
