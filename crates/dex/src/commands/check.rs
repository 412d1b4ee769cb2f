//! `dex check` command implementation.

use clap::Args;
use dex_config::CliSettings;
use dex_content::{check, load_registry};

use crate::commands::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    content: ContentArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Issues` if any authoring issue is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.content.load(CliSettings::default())?;
        let source_dir = &config.content.source_dir;
        output.field("Content", source_dir.display());

        let registry = load_registry(source_dir)?;
        let issues = check(&registry);

        if issues.is_empty() {
            output.success(&format!(
                "No issues in {} component(s) and {} page(s)",
                registry.components().len(),
                registry.guides().len()
            ));
            return Ok(());
        }

        for issue in &issues {
            output.warning(&format!("  {issue}"));
        }
        Err(CliError::Issues {
            count: issues.len(),
        })
    }
}
