//! Preset listing command.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::presets;

/// List the built-in preset configurations
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Output the full preset catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = presets::preset_catalog();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&catalog)
                    .map_err(|e| CliError::io(format!("Failed to serialize presets: {e}")))?
            );
            return Ok(());
        }

        for preset in &catalog {
            println!(
                "{} ({} attributes, {} levels)",
                preset.name,
                preset.attributes.len(),
                preset.levels
            );
        }
        Ok(())
    }
}
