//! RadarPlot - terminal radar chart configuration editor.
//!
//! With no subcommand the interactive editor starts; subcommands provide
//! headless access for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};

use radarplot::cli::{
    DecodeArgs, ExportArgs, ImportArgs, PresetsArgs, ShareArgs, ValidateArgs,
};
use radarplot::constants::APP_BINARY_NAME;
use radarplot::share;
use radarplot::tui;

/// Terminal radar chart configuration editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Share URL to open in the editor
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in preset configurations
    Presets(PresetsArgs),
    /// Validate a configuration
    Validate(ValidateArgs),
    /// Generate a share URL for a configuration
    Share(ShareArgs),
    /// Decode a share URL into a full configuration
    Decode(DecodeArgs),
    /// Export a configuration to a JSON file
    Export(ExportArgs),
    /// Import a configuration JSON file into the saved store
    Import(ImportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Presets(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Share(args) => args.execute(),
            Commands::Decode(args) => args.execute(),
            Commands::Export(args) => args.execute(),
            Commands::Import(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    // Decoding failures fall back to a fresh editor rather than aborting
    let initial = cli.url.as_deref().and_then(|url| {
        let decoded = share::decode_url(url);
        if decoded.is_none() {
            eprintln!("Warning: could not decode configuration from URL, starting fresh");
            eprintln!("Run `{APP_BINARY_NAME} decode <URL>` to inspect the link");
        }
        decoded.map(share::SharedConfiguration::into_configuration)
    });

    tui::run(initial)
}
