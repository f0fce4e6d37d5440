//! Share URL decoding command.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::share;
use crate::storage;

/// Decode a share URL into a full configuration
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Share URL (or just its query string)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Save the decoded configuration to the store instead of printing it
    #[arg(long)]
    pub save: bool,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let shared = share::decode_url(&self.url)
            .ok_or_else(|| CliError::usage("URL does not contain a decodable configuration"))?;
        let config = shared.into_configuration();

        if self.save {
            if crate::presets::is_preset_name(&config.name) {
                return Err(CliError::usage(format!(
                    "'{}' is a built-in preset, nothing to save",
                    config.name
                )));
            }
            let mut saved = storage::load();
            let overwrote = storage::upsert(&mut saved, config.clone());
            storage::save(&saved)
                .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;
            if overwrote {
                println!("Updated '{}'", config.name);
            } else {
                println!("Saved '{}'", config.name);
            }
            return Ok(());
        }

        println!(
            "{}",
            serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize configuration: {e}")))?
        );
        Ok(())
    }
}
