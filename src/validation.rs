//! Configuration validation rules.
//!
//! Validation produces a list of human-readable error strings; an empty list
//! means the configuration is valid. Rules are checked independently so that
//! errors accumulate rather than short-circuiting. The result gates save
//! actions in the UI but never blocks field edits.

use std::collections::HashSet;

use crate::models::configuration::MIN_ATTRIBUTES;
use crate::models::Configuration;

/// Error emitted when a configuration has fewer than three attributes.
pub const ERR_MIN_ATTRIBUTES: &str = "Minimum 3 attributes required";
/// Error emitted when the level scale is below one.
pub const ERR_MIN_LEVELS: &str = "Minimum 1 level required";
/// Error emitted when two attributes share a name after trimming.
pub const ERR_ATTRIBUTE_NAMES_UNIQUE: &str = "Attribute names must be unique";
/// Error emitted when an attribute name is empty after trimming.
pub const ERR_ATTRIBUTE_NAMES_EMPTY: &str = "Attribute names cannot be empty";
/// Error emitted when two level tiers share a name after trimming.
pub const ERR_LEVEL_NAMES_UNIQUE: &str = "Level names must be unique";
/// Error emitted when a level tier name is empty after trimming.
pub const ERR_LEVEL_NAMES_EMPTY: &str = "Level names cannot be empty";

/// Validates a configuration, returning all rule violations.
#[must_use]
pub fn validate(config: &Configuration) -> Vec<String> {
    let mut errors = Vec::new();

    if config.attributes.len() < MIN_ATTRIBUTES {
        errors.push(ERR_MIN_ATTRIBUTES.to_string());
    }

    if config.levels < 1 {
        errors.push(ERR_MIN_LEVELS.to_string());
    }

    let attribute_names: Vec<&str> = config
        .attributes
        .iter()
        .map(|attr| attr.name.trim())
        .collect();
    let unique: HashSet<&&str> = attribute_names.iter().collect();
    if unique.len() != attribute_names.len() {
        errors.push(ERR_ATTRIBUTE_NAMES_UNIQUE.to_string());
    }
    if attribute_names.iter().any(|name| name.is_empty()) {
        errors.push(ERR_ATTRIBUTE_NAMES_EMPTY.to_string());
    }

    let level_names: Vec<&str> = config
        .level_descriptions()
        .iter()
        .map(|level| level.name.trim())
        .collect();
    if !level_names.is_empty() {
        let unique: HashSet<&&str> = level_names.iter().collect();
        if unique.len() != level_names.len() {
            errors.push(ERR_LEVEL_NAMES_UNIQUE.to_string());
        }
        if level_names.iter().any(|name| name.is_empty()) {
            errors.push(ERR_LEVEL_NAMES_EMPTY.to_string());
        }
    }

    errors
}

/// Convenience wrapper: true when [`validate`] returns no errors.
#[must_use]
pub fn is_valid(config: &Configuration) -> bool {
    validate(config).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, LevelDescription};

    fn valid_config() -> Configuration {
        Configuration::new(
            "Test",
            vec![
                Attribute::new("A", 1),
                Attribute::new("B", 2),
                Attribute::new("C", 3),
            ],
            5,
        )
    }

    #[test]
    fn test_valid_configuration_has_no_errors() {
        assert!(validate(&valid_config()).is_empty());
        assert!(is_valid(&valid_config()));
    }

    #[test]
    fn test_too_few_attributes() {
        let mut config = valid_config();
        config.attributes.truncate(2);
        let errors = validate(&config);
        assert!(errors.contains(&ERR_MIN_ATTRIBUTES.to_string()));
    }

    #[test]
    fn test_zero_levels() {
        let mut config = valid_config();
        config.levels = 0;
        let errors = validate(&config);
        assert!(errors.contains(&ERR_MIN_LEVELS.to_string()));
    }

    #[test]
    fn test_duplicate_attribute_names_after_trim() {
        let mut config = valid_config();
        config.attributes[1].name = " A ".to_string();
        let errors = validate(&config);
        assert!(errors.contains(&ERR_ATTRIBUTE_NAMES_UNIQUE.to_string()));

        // Renaming to a distinct non-empty value clears the error
        config.attributes[1].name = "B".to_string();
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_empty_attribute_name() {
        let mut config = valid_config();
        config.attributes[2].name = "   ".to_string();
        let errors = validate(&config);
        assert!(errors.contains(&ERR_ATTRIBUTE_NAMES_EMPTY.to_string()));
    }

    #[test]
    fn test_errors_accumulate() {
        let mut config = valid_config();
        config.attributes.truncate(2);
        config.attributes[0].name = String::new();
        config.attributes[1].name = String::new();
        config.levels = 0;

        let errors = validate(&config);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ERR_MIN_ATTRIBUTES.to_string()));
        assert!(errors.contains(&ERR_MIN_LEVELS.to_string()));
        assert!(errors.contains(&ERR_ATTRIBUTE_NAMES_UNIQUE.to_string()));
        assert!(errors.contains(&ERR_ATTRIBUTE_NAMES_EMPTY.to_string()));
    }

    #[test]
    fn test_level_description_rules_only_when_present() {
        let mut config = valid_config();
        config.level_descriptions = Some(Vec::new());
        assert!(validate(&config).is_empty());

        config.level_descriptions = Some(vec![
            LevelDescription {
                name: "Basic".to_string(),
                description: String::new(),
            },
            LevelDescription {
                name: "Basic ".to_string(),
                description: String::new(),
            },
            LevelDescription {
                name: " ".to_string(),
                description: String::new(),
            },
        ]);
        let errors = validate(&config);
        assert!(errors.contains(&ERR_LEVEL_NAMES_UNIQUE.to_string()));
        assert!(errors.contains(&ERR_LEVEL_NAMES_EMPTY.to_string()));
    }
}
