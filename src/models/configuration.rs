//! Configuration data structures.

use serde::{Deserialize, Serialize};

use crate::models::Attribute;

/// Minimum number of attributes a configuration must carry.
///
/// A radar chart degenerates below three spokes, so removal is refused
/// once a configuration is down to this many attributes.
pub const MIN_ATTRIBUTES: usize = 3;

/// Named tier on the level scale with a narrative description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescription {
    /// Tier name (e.g., "Proficient")
    pub name: String,
    /// Free-form description text
    pub description: String,
}

/// A complete radar chart configuration.
///
/// Attribute order is significant: it determines the angular order of the
/// chart spokes. The level count is the radial axis maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Configuration name (identity for save/overwrite/delete)
    pub name: String,
    /// Ordered chart dimensions
    pub attributes: Vec<Attribute>,
    /// Radial axis maximum (level scale)
    pub levels: u32,
    /// Optional named tiers for the level scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_descriptions: Option<Vec<LevelDescription>>,
}

impl Configuration {
    /// Creates a configuration with the given name, attributes, and scale.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, levels: u32) -> Self {
        Self {
            name: name.into(),
            attributes,
            levels,
            level_descriptions: None,
        }
    }

    /// Returns a copy of this configuration under a different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut config = self.clone();
        config.name = name.into();
        config
    }

    /// Appends a new attribute named `Attribute N` with value 1.
    pub fn add_attribute(&mut self) {
        let name = format!("Attribute {}", self.attributes.len() + 1);
        self.attributes.push(Attribute::new(name, 1));
    }

    /// Removes the attribute at `index`.
    ///
    /// Refused (returns false) when the configuration is at the minimum of
    /// three attributes or the index is out of range.
    pub fn remove_attribute(&mut self, index: usize) -> bool {
        if self.attributes.len() <= MIN_ATTRIBUTES || index >= self.attributes.len() {
            return false;
        }
        self.attributes.remove(index);
        true
    }

    /// Sets an attribute's value, clamped to `[0, levels]`.
    pub fn set_attribute_value(&mut self, index: usize, value: u32) {
        let max = self.levels;
        if let Some(attr) = self.attributes.get_mut(index) {
            attr.value = value.min(max);
        }
    }

    /// Appends a level description named `Level N` with empty text.
    pub fn add_level_description(&mut self) {
        let descs = self.level_descriptions.get_or_insert_with(Vec::new);
        descs.push(LevelDescription {
            name: format!("Level {}", descs.len() + 1),
            description: String::new(),
        });
    }

    /// Removes the level description entry at `index`, if present.
    pub fn remove_level_description(&mut self, index: usize) {
        if let Some(descs) = self.level_descriptions.as_mut() {
            if index < descs.len() {
                descs.remove(index);
            }
        }
    }

    /// Returns the level description entries, or an empty slice.
    #[must_use]
    pub fn level_descriptions(&self) -> &[LevelDescription] {
        self.level_descriptions.as_deref().unwrap_or_default()
    }

    /// Returns true if the configuration carries named level tiers.
    #[must_use]
    pub fn has_level_descriptions(&self) -> bool {
        !self.level_descriptions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_attr_config() -> Configuration {
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
    fn test_add_attribute_names_sequentially() {
        let mut config = three_attr_config();
        config.add_attribute();
        assert_eq!(config.attributes.len(), 4);
        assert_eq!(config.attributes[3].name, "Attribute 4");
        assert_eq!(config.attributes[3].value, 1);
    }

    #[test]
    fn test_remove_attribute_refused_at_minimum() {
        let mut config = three_attr_config();
        assert!(!config.remove_attribute(0));
        assert_eq!(config.attributes.len(), 3);

        config.add_attribute();
        assert!(config.remove_attribute(0));
        assert_eq!(config.attributes.len(), 3);
        assert_eq!(config.attributes[0].name, "B");
    }

    #[test]
    fn test_remove_attribute_out_of_range() {
        let mut config = three_attr_config();
        config.add_attribute();
        assert!(!config.remove_attribute(10));
        assert_eq!(config.attributes.len(), 4);
    }

    #[test]
    fn test_set_attribute_value_clamps_to_levels() {
        let mut config = three_attr_config();
        config.set_attribute_value(0, 99);
        assert_eq!(config.attributes[0].value, 5);

        config.set_attribute_value(1, 4);
        assert_eq!(config.attributes[1].value, 4);
    }

    #[test]
    fn test_level_description_helpers() {
        let mut config = three_attr_config();
        assert!(!config.has_level_descriptions());

        config.add_level_description();
        config.add_level_description();
        assert_eq!(config.level_descriptions().len(), 2);
        assert_eq!(config.level_descriptions()[1].name, "Level 2");

        config.remove_level_description(0);
        assert_eq!(config.level_descriptions().len(), 1);
        assert_eq!(config.level_descriptions()[0].name, "Level 2");
    }

    #[test]
    fn test_with_name_keeps_contents() {
        let config = three_attr_config();
        let renamed = config.with_name("Renamed");
        assert_eq!(renamed.name, "Renamed");
        assert_eq!(renamed.attributes, config.attributes);
        assert_eq!(renamed.levels, config.levels);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut config = three_attr_config();
        config.level_descriptions = Some(vec![LevelDescription {
            name: "Basic".to_string(),
            description: "Entry level".to_string(),
        }]);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"levelDescriptions\""));
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
