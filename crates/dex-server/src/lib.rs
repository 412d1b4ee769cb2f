//! HTTP server for the dex documentation index.
//!
//! Read-only axum server over a loaded registry:
//! - JSON endpoints for component docs and getting-started pages
//! - The plain-text feed at `/llms.txt`
//! - The sitemap at `/sitemap.xml` and `/api/sitemap`
//!
//! # Quick Start
//!
//! ```ignore
//! use dex_config::Config;
//! use dex_server::{run_server, server_config_from_dex_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     let server_config = server_config_from_dex_config(&config, "1.0.0".to_owned()).unwrap();
//!     run_server(server_config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (dex-server)
//!                      │
//!                      ├─► /api/* ──► Registry lookups + adjacency
//!                      │
//!                      └─► /llms.txt, /sitemap.xml ──► dex-feeds views
//! ```
//!
//! The registry is loaded once at startup and shared read-only.

mod app;
mod error;
mod handlers;
mod headers;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use dex_config::ConfigError;
use dex_content::load_registry;
use dex_feeds::FeedOptions;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Absolute base URL without trailing slash.
    pub base_url: String,
    /// Feed text and category order.
    pub feed: FeedOptions,
    /// Application version (part of the feed `ETag`).
    pub version: String,
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the content fails to load or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(load_registry(&config.source_dir)?);

    let state = Arc::new(AppState::new(
        registry,
        config.base_url.clone(),
        &config.feed,
        &config.version,
    ));

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, base_url = %config.base_url, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from dex config.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if `site.base_url` is missing or
/// invalid, since every feed and sitemap link is absolute.
pub fn server_config_from_dex_config(
    config: &dex_config::Config,
    version: String,
) -> Result<ServerConfig, ConfigError> {
    Ok(ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.content.source_dir.clone(),
        base_url: config.require_base_url()?.to_owned(),
        feed: feed_options(config),
        version,
    })
}

/// Feed options from dex config.
#[must_use]
pub fn feed_options(config: &dex_config::Config) -> FeedOptions {
    FeedOptions {
        title: config.site.title.clone(),
        summary: config.site.summary.clone(),
        components_blurb: config.feed.components_blurb.clone(),
        category_order: config.feed.category_order.clone(),
    }
}
