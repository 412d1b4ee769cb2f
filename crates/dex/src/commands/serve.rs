//! `dex serve` command implementation.

use clap::Args;
use dex_config::CliSettings;
use dex_server::{run_server, server_config_from_dex_config};

use crate::commands::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Absolute base URL for feed and sitemap links (overrides config).
    #[arg(long, env = "DEX_BASE_URL")]
    base_url: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.content.load(CliSettings {
            host: self.host,
            port: self.port,
            base_url: self.base_url,
            ..CliSettings::default()
        })?;
        let server_config = server_config_from_dex_config(&config, version.to_owned())?;

        output.info(&format!(
            "Starting server on {}:{}",
            server_config.host, server_config.port
        ));
        output.field("Content", server_config.source_dir.display());
        output.field("Base URL", &server_config.base_url);

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
