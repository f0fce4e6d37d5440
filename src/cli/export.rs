//! Export command writing a configuration to a JSON file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{self, CliError, CliResult};

/// Export a preset or saved configuration to a JSON file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Name of the preset or saved configuration
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output path (defaults to the configuration name with .json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = common::resolve_by_name(&self.name)?;

        let output_path = self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.json", config.name.replace(' ', "_").to_lowercase()))
        });

        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?;
        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", output_path.display())))?;

        println!("✓ Exported '{}' to {}", config.name, output_path.display());
        Ok(())
    }
}
