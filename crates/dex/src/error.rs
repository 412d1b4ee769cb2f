//! CLI error types.

use dex_config::ConfigError;
use dex_content::LoadError;
use dex_feeds::SitemapError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Server(String),

    #[error("{count} content issue(s) found")]
    Issues { count: usize },
}
