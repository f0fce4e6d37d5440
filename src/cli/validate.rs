//! Validation command for configuration files and saved configurations.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{self, CliError, CliResult};
use crate::validation;

/// Validate a configuration for errors
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to a configuration JSON file
    #[arg(short, long, value_name = "FILE", conflicts_with = "name")]
    pub file: Option<PathBuf>,

    /// Name of a preset or saved configuration
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a validation run.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    errors: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = match (&self.file, &self.name) {
            (Some(path), _) => common::read_configuration_file(path)?,
            (None, Some(name)) => common::resolve_by_name(name)?,
            (None, None) => {
                return Err(CliError::usage("Specify --file or --name"));
            }
        };

        let errors = validation::validate(&config);
        let response = ValidationResponse {
            valid: errors.is_empty(),
            errors,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid {
            println!("✓ '{}' is valid", config.name);
        } else {
            println!("✗ '{}' has validation errors:", config.name);
            for error in &response.errors {
                println!("  - {error}");
            }
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Validation failed"))
        }
    }
}
