//! Configuration parsing and validation.

use std::fs;

use gallery_core::{ConfigError, GalleryConfig, UrlConfig};
use gallery_model::BookId;

#[test]
fn empty_text_yields_defaults() {
    let config = GalleryConfig::from_toml_str("").unwrap();
    assert_eq!(config, GalleryConfig::default());
    assert_eq!(config.reveal.initial, 12);
    assert_eq!(config.reveal.step, 12);
    assert_eq!(config.url, UrlConfig::default());
    assert_eq!(config.url.param, "image");
    assert_eq!(config.url.path, "/gallery");
    assert!(config.url.share_selection);
}

#[test]
fn parses_every_section() {
    let config = GalleryConfig::from_toml_str(
        r#"
locale = "es"
fallback_locale = "en"
canonical_order = ["Exodus", "Genesis"]

[reveal]
initial = 6
step = 3

[url]
share_selection = false
param = "art"
path = "/es/galeria"
"#,
    )
    .unwrap();

    assert_eq!(config.locale, "es");
    assert_eq!((config.reveal.initial, config.reveal.step), (6, 3));
    assert!(!config.url.share_selection);
    assert_eq!(config.url.param, "art");
    let order = config.canonical_order().unwrap();
    assert_eq!(order.position(&BookId::new("Exodus").unwrap()), Some(0));
    assert_eq!(order.position(&BookId::new("Ruth").unwrap()), None);
}

#[test]
fn unknown_keys_are_rejected() {
    let error = GalleryConfig::from_toml_str("[reveal]\nbatch = 4\n").unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
fn zero_step_is_invalid() {
    let error = GalleryConfig::from_toml_str("[reveal]\nstep = 0\n").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid configuration: reveal.step must be at least 1"
    );
}

#[test]
fn blank_param_is_invalid() {
    let error = GalleryConfig::from_toml_str("[url]\nparam = \" \"\n").unwrap_err();
    assert!(matches!(error, ConfigError::Invalid(_)));
}

#[test]
fn duplicate_canonical_books_are_invalid() {
    let error =
        GalleryConfig::from_toml_str(r#"canonical_order = ["Ruth", "Ruth"]"#).unwrap_err();
    assert!(matches!(error, ConfigError::CanonicalOrder(_)));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GalleryConfig::load_or_default(&dir.path().join("gallery.toml")).unwrap();
    assert_eq!(config, GalleryConfig::default());
}

#[test]
fn load_resolves_relative_translations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.toml");
    fs::write(&path, "translations = \"i18n/messages.toml\"\n").unwrap();

    let config = GalleryConfig::load(&path).unwrap();

    assert_eq!(
        config.translations,
        Some(dir.path().join("i18n/messages.toml"))
    );
}

#[test]
fn load_reports_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = GalleryConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::Read { .. }));
}
