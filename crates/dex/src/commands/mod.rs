//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod serve;

use std::path::PathBuf;

use clap::Args;
use dex_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use serve::ServeArgs;

/// Arguments shared by every command that reads content.
#[derive(Args)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover dex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ContentArgs {
    /// Load config with these arguments applied on top of `settings`.
    pub(crate) fn load(self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir,
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}
