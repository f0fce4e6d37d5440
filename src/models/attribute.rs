//! Attribute data structures.

use serde::{Deserialize, Serialize};

/// Narrative description of what an attribute looks like at a given level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLevelDescription {
    /// Level tier this description applies to (1-based)
    pub level: u32,
    /// Free-form description text
    pub description: String,
}

/// One named, numeric-valued dimension plotted as a chart spoke.
///
/// # Invariants
///
/// - name must be unique within a configuration (enforced by validation)
/// - value should stay within `[0, levels]` (clamped on edit)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Display name (chart axis label)
    pub name: String,
    /// Plotted value on the radial axis
    pub value: u32,
    /// Optional long description shown in the detail panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional level-by-level descriptions shown in the detail table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_descriptions: Option<Vec<AttributeLevelDescription>>,
}

impl Attribute {
    /// Creates a bare attribute with no descriptions.
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
            level_descriptions: None,
        }
    }

    /// Creates an attribute with a description and per-level descriptions.
    pub fn described(
        name: impl Into<String>,
        value: u32,
        description: impl Into<String>,
        level_descriptions: Vec<AttributeLevelDescription>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            description: Some(description.into()),
            level_descriptions: Some(level_descriptions),
        }
    }

    /// Returns true if the attribute carries any level-by-level descriptions.
    #[must_use]
    pub fn has_level_descriptions(&self) -> bool {
        self.level_descriptions
            .as_ref()
            .is_some_and(|descs| !descs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_new() {
        let attr = Attribute::new("Programming", 8);
        assert_eq!(attr.name, "Programming");
        assert_eq!(attr.value, 8);
        assert!(attr.description.is_none());
        assert!(!attr.has_level_descriptions());
    }

    #[test]
    fn test_attribute_described() {
        let attr = Attribute::described(
            "Curiosity",
            3,
            "Is fascinated by the world",
            vec![AttributeLevelDescription {
                level: 1,
                description: "Learns new things".to_string(),
            }],
        );
        assert!(attr.has_level_descriptions());
        assert_eq!(attr.description.as_deref(), Some("Is fascinated by the world"));
    }

    #[test]
    fn test_attribute_serde_camel_case() {
        let attr = Attribute::described(
            "Quality mindset",
            2,
            "desc",
            vec![AttributeLevelDescription {
                level: 1,
                description: "d1".to_string(),
            }],
        );
        let json = serde_json::to_string(&attr).unwrap();
        assert!(json.contains("\"levelDescriptions\""));
        assert!(!json.contains("level_descriptions"));

        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attr);
    }

    #[test]
    fn test_bare_attribute_omits_optional_fields() {
        let json = serde_json::to_string(&Attribute::new("Design", 6)).unwrap();
        assert_eq!(json, r#"{"name":"Design","value":6}"#);
    }
}
