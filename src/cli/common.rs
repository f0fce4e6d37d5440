//! Shared CLI error handling and input helpers.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::models::Configuration;
use crate::storage;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-level error with a stable exit code per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// File or store access failure
    Io(String),
    /// Configuration failed validation
    Validation(String),
    /// Bad arguments or unresolvable input
    Usage(String),
}

impl CliError {
    /// Wraps an I/O failure message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Wraps a validation failure message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wraps a usage failure message.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code for this error category.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
            Self::Usage(_) => 64,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) | Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Reads a full configuration from a JSON file.
pub fn read_configuration_file(path: &Path) -> CliResult<Configuration> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::io(format!("Failed to parse {}: {e}", path.display())))
}

/// Looks up a configuration by name: presets first, then the saved store.
pub fn resolve_by_name(name: &str) -> CliResult<Configuration> {
    crate::presets::preset_by_name(name)
        .or_else(|| storage::load().into_iter().find(|c| c.name == name))
        .ok_or_else(|| CliError::usage(format!("No preset or saved configuration named '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(CliError::io("x").exit_code(), 1);
        assert_eq!(CliError::validation("x").exit_code(), 2);
        assert_eq!(CliError::usage("x").exit_code(), 64);
    }

    #[test]
    fn test_read_configuration_file_errors() {
        let err = read_configuration_file(Path::new("/no/such/file.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_resolve_preset_by_name() {
        let config = resolve_by_name(crate::presets::PRESET_NAMES[0]).unwrap();
        assert_eq!(config.name, crate::presets::PRESET_NAMES[0]);
    }

    #[test]
    fn test_resolve_unknown_name_is_usage_error() {
        let err = resolve_by_name("definitely missing").unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
