//! `dex build` command implementation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use dex_config::CliSettings;
use dex_content::{Registry, load_registry};
use dex_feeds::{FeedOptions, render_llms_txt, sitemap_entries, to_xml};
use dex_server::feed_options;

use crate::commands::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Output directory for `llms.txt` and `sitemap.xml`.
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Absolute base URL for feed and sitemap links (overrides config).
    #[arg(long, env = "DEX_BASE_URL")]
    base_url: Option<String>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load, or an
    /// output file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.content.load(CliSettings {
            base_url: self.base_url,
            ..CliSettings::default()
        })?;
        let base_url = config.require_base_url()?;
        let registry = load_registry(&config.content.source_dir)?;

        let written = write_outputs(
            &registry,
            base_url,
            &feed_options(&config),
            &self.out_dir,
            Utc::now(),
        )?;

        for path in &written {
            output.field("Wrote", path.display());
        }
        output.success(&format!("Build complete: {}", self.out_dir.display()));
        Ok(())
    }
}

/// Write the feed and sitemap into `out_dir`, creating it if needed.
fn write_outputs(
    registry: &Registry,
    base_url: &str,
    feed: &FeedOptions,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.display().to_string(),
        source,
    })?;

    let llms_txt = render_llms_txt(registry, base_url, feed);
    let sitemap = to_xml(&sitemap_entries(registry, base_url, now))?;

    let mut written = Vec::new();
    for (name, contents) in [("llms.txt", llms_txt), ("sitemap.xml", sitemap)] {
        let path = out_dir.join(name);
        std::fs::write(&path, contents).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Wrote output");
        written.push(path);
    }
    Ok(written)
}
