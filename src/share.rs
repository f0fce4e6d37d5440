//! Shareable-link codec.
//!
//! A configuration is projected onto four query parameters: `config` (name),
//! `attributes` (JSON array of name/value pairs), `levels`, and `preset`
//! (present iff the name matches a built-in preset). Descriptions are
//! intentionally dropped to keep links short; decoding a link therefore
//! reproduces only the chart-relevant projection of the configuration.
//!
//! Parameter values are percent-encoded as components before query assembly,
//! and the inverse decode runs after query parsing, so arbitrary names
//! round-trip exactly.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::{Attribute, Configuration};
use crate::presets::{is_preset_name, preset_by_name};

/// The `{name, value}` projection of an attribute carried in a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedAttribute {
    /// Attribute name
    pub name: String,
    /// Attribute value
    pub value: u32,
}

/// A configuration decoded from a shareable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedConfiguration {
    /// Configuration name (`"Custom Configuration"` when the link omits it)
    pub name: String,
    /// Attribute name/value pairs, in spoke order
    pub attributes: Vec<SharedAttribute>,
    /// Level scale (4 when the link omits it)
    pub levels: u32,
    /// True when the link was flagged as a preset
    pub is_preset: bool,
}

impl SharedConfiguration {
    /// Rebuilds a full configuration from the decoded projection.
    ///
    /// A preset-flagged link whose name matches the catalog restores the full
    /// preset (descriptions included); anything else becomes a bare
    /// configuration built from the pairs.
    #[must_use]
    pub fn into_configuration(self) -> Configuration {
        if self.is_preset {
            if let Some(preset) = preset_by_name(&self.name) {
                return preset;
            }
        }

        let attributes = self
            .attributes
            .into_iter()
            .map(|a| Attribute::new(a.name, a.value))
            .collect();
        Configuration::new(self.name, attributes, self.levels)
    }
}

/// Encodes a configuration as a shareable URL under `base`.
#[must_use]
pub fn encode_url(base: &str, config: &Configuration) -> String {
    let pairs: Vec<SharedAttribute> = config
        .attributes
        .iter()
        .map(|attr| SharedAttribute {
            name: attr.name.clone(),
            value: attr.value,
        })
        .collect();
    // Vec<SharedAttribute> always serializes
    let attributes_json = serde_json::to_string(&pairs).unwrap_or_default();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("config", &urlencoding::encode(&config.name));
    serializer.append_pair("attributes", &urlencoding::encode(&attributes_json));
    serializer.append_pair("levels", &config.levels.to_string());
    if is_preset_name(&config.name) {
        serializer.append_pair("preset", "true");
    }

    format!("{}?{}", base.trim_end_matches('?'), serializer.finish())
}

/// Decodes a shareable URL (or bare query string) back to a configuration.
///
/// Returns `None` when the `attributes` parameter is absent or any part of
/// the payload is malformed; the caller keeps its current state in that case.
#[must_use]
pub fn decode_url(url: &str) -> Option<SharedConfiguration> {
    let query = url.split_once('?').map_or(url, |(_, q)| q);

    let mut name_param: Option<String> = None;
    let mut attributes_param: Option<String> = None;
    let mut levels_param: Option<String> = None;
    let mut preset_param: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "config" => name_param = Some(value.into_owned()),
            "attributes" => attributes_param = Some(value.into_owned()),
            "levels" => levels_param = Some(value.into_owned()),
            "preset" => preset_param = Some(value.into_owned()),
            // Unknown parameters are ignored
            _ => {}
        }
    }

    let attributes_raw = attributes_param?;
    let attributes_json = match urlencoding::decode(&attributes_raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            eprintln!("Warning: failed to parse configuration from URL: {e}");
            return None;
        }
    };
    let attributes: Vec<SharedAttribute> = match serde_json::from_str(&attributes_json) {
        Ok(attrs) => attrs,
        Err(e) => {
            eprintln!("Warning: failed to parse configuration from URL: {e}");
            return None;
        }
    };

    let name = match name_param {
        Some(raw) => urlencoding::decode(&raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| "Custom Configuration".to_string()),
        None => "Custom Configuration".to_string(),
    };
    let levels = levels_param.and_then(|l| l.parse().ok()).unwrap_or(4);
    let is_preset = preset_param.as_deref() == Some("true");

    Some(SharedConfiguration {
        name,
        attributes,
        levels,
        is_preset,
    })
}
