//! Saved-configuration persistence.
//!
//! The store is a single JSON file holding an array of full [`Configuration`]
//! objects, read and written whole on every change. Malformed or absent data
//! is treated as an empty store; corruption is logged but never surfaced as an
//! error to the caller.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, STORE_FILE_NAME};
use crate::models::Configuration;

/// Gets the platform-specific config directory path.
///
/// Honors the `RADARPLOT_CONFIG_DIR` environment variable (test isolation),
/// otherwise:
/// - Linux: `~/.config/RadarPlot/`
/// - macOS: `~/Library/Application Support/RadarPlot/`
/// - Windows: `%APPDATA%\RadarPlot\`
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let config_dir = dirs::config_dir()
        .context("Failed to determine config directory")?
        .join("RadarPlot");

    Ok(config_dir)
}

/// Gets the full path to the saved-configuration store file.
pub fn store_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(STORE_FILE_NAME))
}

/// Loads the saved configurations from the default store location.
///
/// Absent or malformed store data yields an empty list.
#[must_use]
pub fn load() -> Vec<Configuration> {
    match store_file_path() {
        Ok(path) => load_from(&path),
        Err(e) => {
            eprintln!("Warning: cannot resolve configuration store: {e}");
            Vec::new()
        }
    }
}

/// Loads saved configurations from an explicit store file.
///
/// Absent file and parse failures both recover to an empty list; parse
/// failures are logged so a corrupted store is at least visible.
#[must_use]
pub fn load_from(path: &Path) -> Vec<Configuration> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    match serde_json::from_str(&content) {
        Ok(configs) => configs,
        Err(e) => {
            eprintln!(
                "Warning: ignoring malformed configuration store {}: {e}",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Saves the configuration list to the default store location.
pub fn save(configs: &[Configuration]) -> Result<()> {
    save_to(&store_file_path()?, configs)
}

/// Saves the configuration list to an explicit store file using atomic write.
///
/// Uses the temp file + rename pattern so the store is never left truncated.
pub fn save_to(path: &Path, configs: &[Configuration]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create config directory: {}",
            parent.display()
        ))?;
    }

    let content =
        serde_json::to_string_pretty(configs).context("Failed to serialize configurations")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).context(format!(
        "Failed to write temp store file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp store file to: {}",
        path.display()
    ))?;

    Ok(())
}

/// Inserts or replaces `config` in `list` by name.
///
/// Returns true when an existing entry was overwritten. Validation is not
/// checked here; save gating happens in the callers.
pub fn upsert(list: &mut Vec<Configuration>, config: Configuration) -> bool {
    if let Some(existing) = list.iter_mut().find(|c| c.name == config.name) {
        *existing = config;
        true
    } else {
        list.push(config);
        false
    }
}

/// Removes the configuration named `name` from `list`.
///
/// Returns true when an entry was removed.
pub fn remove(list: &mut Vec<Configuration>, name: &str) -> bool {
    let before = list.len();
    list.retain(|c| c.name != name);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;
    use tempfile::TempDir;

    fn config(name: &str) -> Configuration {
        Configuration::new(
            name,
            vec![
                Attribute::new("A", 1),
                Attribute::new("B", 2),
                Attribute::new("C", 3),
            ],
            5,
        )
    }

    #[test]
    fn test_load_from_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");
        assert!(load_from(&path).is_empty());
    }

    #[test]
    fn test_load_from_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_from(&path).is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let configs = vec![config("One"), config("Two")];
        save_to(&path, &configs).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded, configs);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep/nested/store.json");
        save_to(&path, &[config("One")]).unwrap();
        assert_eq!(load_from(&path).len(), 1);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        save_to(&path, &[config("One")]).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_upsert_overwrites_by_name() {
        let mut list = vec![config("One"), config("Two")];

        let mut updated = config("Two");
        updated.levels = 9;
        assert!(upsert(&mut list, updated));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].levels, 9);
    }

    #[test]
    fn test_upsert_appends_new_name() {
        let mut list = vec![config("One")];
        assert!(!upsert(&mut list, config("Two")));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "Two");
    }

    #[test]
    fn test_remove_by_name() {
        let mut list = vec![config("One"), config("Two")];
        assert!(remove(&mut list, "One"));
        assert_eq!(list.len(), 1);
        assert!(!remove(&mut list, "One"));
    }

    #[test]
    fn test_store_layout_is_full_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut c = config("Full");
        c.attributes[0].description = Some("described".to_string());
        save_to(&path, &[c]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["attributes"][0]["description"], "described");
    }
}
