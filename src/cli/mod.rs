//! CLI command handlers.
//!
//! Headless, scriptable access to the core functionality: listing presets,
//! validating, sharing, and moving configurations in and out of the store.

pub mod common;
pub mod decode;
pub mod export;
pub mod import;
pub mod presets;
pub mod share;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use decode::DecodeArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
pub use presets::PresetsArgs;
pub use share::ShareArgs;
pub use validate::ValidateArgs;
