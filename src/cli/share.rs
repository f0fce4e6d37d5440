//! Share URL generation command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{self, CliError, CliResult};
use crate::config::Config;
use crate::share;

/// Generate a share URL for a configuration
#[derive(Debug, Clone, Args)]
pub struct ShareArgs {
    /// Path to a configuration JSON file
    #[arg(short, long, value_name = "FILE", conflicts_with = "name")]
    pub file: Option<PathBuf>,

    /// Name of a preset or saved configuration
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Base URL override (defaults to the configured share base URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl ShareArgs {
    /// Execute the share command
    pub fn execute(&self) -> CliResult<()> {
        let config = match (&self.file, &self.name) {
            (Some(path), _) => common::read_configuration_file(path)?,
            (None, Some(name)) => common::resolve_by_name(name)?,
            (None, None) => {
                return Err(CliError::usage("Specify --file or --name"));
            }
        };

        let base_url = match &self.base_url {
            Some(url) => url.clone(),
            None => {
                Config::load()
                    .map_err(|e| CliError::io(format!("Failed to load preferences: {e}")))?
                    .share
                    .base_url
            }
        };

        println!("{}", share::encode_url(&base_url, &config));
        Ok(())
    }
}
