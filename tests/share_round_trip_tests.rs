//! Integration tests for the share URL codec against full configurations.

use radarplot::models::{Attribute, Configuration};
use radarplot::presets;
use radarplot::share;
use radarplot::validation;

const BASE: &str = "https://radar.example.com/";

#[test]
fn test_custom_configuration_round_trip() {
    let config = Configuration::new(
        "Team Review",
        vec![
            Attribute::new("Backend", 7),
            Attribute::new("Frontend", 5),
            Attribute::new("DevOps", 3),
        ],
        10,
    );

    let url = share::encode_url(BASE, &config);
    assert!(url.starts_with(BASE));

    let decoded = share::decode_url(&url).unwrap();
    assert_eq!(decoded.name, "Team Review");
    assert_eq!(decoded.levels, 10);
    assert!(!decoded.is_preset);
    assert_eq!(decoded.attributes.len(), 3);
    assert_eq!(decoded.attributes[1].name, "Frontend");
    assert_eq!(decoded.attributes[1].value, 5);

    let restored = decoded.into_configuration();
    assert!(validation::validate(&restored).is_empty());
}

#[test]
fn test_preset_share_restores_full_catalog_entry() {
    let preset = presets::preset_by_name("Skills Assessment").unwrap();
    let url = share::encode_url(BASE, &preset);
    assert!(url.contains("preset=true"));

    let decoded = share::decode_url(&url).unwrap();
    assert!(decoded.is_preset);

    // The restored configuration carries the preset's full descriptions,
    // which the URL itself never encodes
    let restored = decoded.into_configuration();
    assert_eq!(restored, preset);
}

#[test]
fn test_modified_preset_name_does_not_restore_preset() {
    let mut config = presets::preset_by_name("Skills Assessment").unwrap();
    config.name = "Skills Assessment v2".to_string();

    let url = share::encode_url(BASE, &config);
    assert!(!url.contains("preset=true"));

    let decoded = share::decode_url(&url).unwrap();
    assert!(!decoded.is_preset);
    assert_eq!(decoded.into_configuration().name, "Skills Assessment v2");
}

#[test]
fn test_share_is_lossy_for_descriptions() {
    let mut config = presets::preset_by_name("Basic Template").unwrap();
    config.attributes[0].description = Some("local note".to_string());
    config.name = "Annotated".to_string();

    let decoded = share::decode_url(&share::encode_url(BASE, &config)).unwrap();
    let restored = decoded.into_configuration();
    assert!(restored.attributes[0].description.is_none());
}

#[test]
fn test_unicode_attribute_names_survive() {
    let config = Configuration::new(
        "Équipe & Co",
        vec![
            Attribute::new("Qualité", 4),
            Attribute::new("Vitesse ⚡", 2),
            Attribute::new("Coût", 3),
        ],
        5,
    );

    let decoded = share::decode_url(&share::encode_url(BASE, &config)).unwrap();
    assert_eq!(decoded.name, "Équipe & Co");
    assert_eq!(decoded.attributes[1].name, "Vitesse ⚡");
}

#[test]
fn test_decode_applies_defaults_for_missing_params() {
    let url = format!(
        "{BASE}?attributes={}",
        urlencoding::encode(r#"[{"name":"A","value":1},{"name":"B","value":2},{"name":"C","value":3}]"#)
    );
    let decoded = share::decode_url(&url).unwrap();
    assert_eq!(decoded.name, "Custom Configuration");
    assert_eq!(decoded.levels, 4);
}

#[test]
fn test_decode_rejects_urls_without_attributes() {
    assert!(share::decode_url("https://radar.example.com/?config=Hello").is_none());
    assert!(share::decode_url("https://radar.example.com/").is_none());
}
