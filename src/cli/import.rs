//! Import command adding a configuration file to the saved store.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{self, CliError, CliResult};
use crate::storage;
use crate::validation;

/// Import a configuration JSON file into the saved store
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Path to a configuration JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Import even when the configuration has validation errors
    #[arg(long)]
    pub force: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let config = common::read_configuration_file(&self.file)?;

        if crate::presets::is_preset_name(&config.name) {
            return Err(CliError::usage(format!(
                "'{}' is a built-in preset name",
                config.name
            )));
        }

        let errors = validation::validate(&config);
        if !errors.is_empty() && !self.force {
            for error in &errors {
                eprintln!("  - {error}");
            }
            return Err(CliError::validation(
                "Configuration has validation errors (use --force to import anyway)",
            ));
        }

        let mut saved = storage::load();
        let overwrote = storage::upsert(&mut saved, config.clone());
        storage::save(&saved)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        if overwrote {
            println!("✓ Updated '{}'", config.name);
        } else {
            println!("✓ Imported '{}'", config.name);
        }
        Ok(())
    }
}
