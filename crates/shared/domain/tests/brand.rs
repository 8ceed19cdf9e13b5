use olaat_domain::brand::{BrandConfig, FALLBACK_COLOR, FALLBACK_FONT};
use olaat_domain::constants::{BODY, GOLD, HEADER_BLUE, HEADING};
use serde_json::json;

#[test]
fn brand_defaults_are_sane() {
    let brand = BrandConfig::default();
    assert_eq!(brand.name, "One Leader at a Time – Leadership Group™");
    assert_eq!(brand.legal, "One Leader at a Time Leadership Group, LLC");
    assert_eq!(brand.tagline, "Transforming Ordinary into Legendary");
    assert_eq!(brand.banner_url, "/fb-cover.png");
    assert_eq!(brand.colors.len(), 7);
    assert_eq!(brand.fonts.len(), 2);
}

#[test]
fn present_keys_resolve_to_their_value() {
    let brand = BrandConfig::default();
    assert_eq!(brand.color(HEADER_BLUE), "#4C7CC1");
    assert_eq!(brand.color_or(GOLD, "#000000"), "#F5C24B");
    assert_eq!(brand.font(HEADING), "'Merriweather', Georgia, 'Times New Roman', serif");
    assert_eq!(brand.color(BODY), "#334155");
}

#[test]
fn absent_keys_fall_back() {
    let brand = BrandConfig::default();
    assert_eq!(brand.color_or("accent", "#123456"), "#123456");
    assert_eq!(brand.color("accent"), FALLBACK_COLOR);
    assert_eq!(brand.font_or("mono", "monospace"), "monospace");
    assert_eq!(brand.font("mono"), FALLBACK_FONT);
}

#[test]
fn empty_entries_degrade_like_absent_ones() {
    let raw = json!({ "colors": { "headerBlue": "" }, "fonts": { "heading": "" } });
    let brand: BrandConfig = serde_json::from_value(raw).expect("brand deserialize");
    assert_eq!(brand.color(HEADER_BLUE), FALLBACK_COLOR);
    assert_eq!(brand.font(HEADING), FALLBACK_FONT);
}

#[test]
fn header_color_survives_a_partial_palette() {
    // A palette edited down to a single entry must not break the header.
    let raw = json!({ "colors": { "gold": "#F5C24B" } });
    let brand: BrandConfig = serde_json::from_value(raw).expect("brand deserialize");
    assert_eq!(brand.color(HEADER_BLUE), FALLBACK_COLOR);
    assert_eq!(brand.color(GOLD), "#F5C24B");
}

#[test]
fn brand_config_deserializes() {
    let raw = json!({
        "name": "Acme Leadership",
        "legal": "Acme Leadership, LLC",
        "banner_url": "/acme.png",
        "colors": { "headerBlue": "#336699" }
    });

    let brand: BrandConfig = serde_json::from_value(raw).expect("brand deserialize");
    assert_eq!(brand.name, "Acme Leadership");
    assert_eq!(brand.color(HEADER_BLUE), "#336699");
    // Unlisted sections fall back to their serde defaults.
    assert_eq!(brand.tagline, "Transforming Ordinary into Legendary");
}

#[test]
fn copyright_uses_the_given_year() {
    let brand = BrandConfig::default();
    assert_eq!(
        brand.copyright(2025),
        "© 2025 One Leader at a Time Leadership Group, LLC. All rights reserved."
    );
}

#[test]
fn self_check_passes_on_defaults() {
    let brand = BrandConfig::default();
    assert!(brand.self_check().iter().all(|row| row.pass));
}

#[test]
fn self_check_reports_failures_without_halting() {
    let raw = json!({ "name": "", "banner_url": "", "colors": {}, "fonts": {} });
    let brand: BrandConfig = serde_json::from_value(raw).expect("brand deserialize");
    let rows = brand.self_check();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| !row.pass));
    // Lookups stay total even on a fully failing config.
    assert_eq!(brand.color(HEADER_BLUE), FALLBACK_COLOR);
}
