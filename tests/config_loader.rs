use carousel::config::{Config, ConfigError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_yields_builtin_deck() {
    let dir = tempdir().expect("tempdir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn builtin_deck_is_valid() {
    let config = Config::default();
    config.validate().expect("valid");
    assert_eq!(config.sliders.len(), 2);
    assert!(config.sliders[0].options.resolve().auto_play());
    assert!(config.sliders[1].options.resolve().show_indicators());
}

#[test]
fn parses_deck_with_options() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deck.toml");
    fs::write(
        &path,
        r#"
[[sliders]]
id = "gallery"
title = "Gallery"

[sliders.options]
slide_count = 2
auto_play = true
loop = true
auto_play_interval_ms = 1500
show_indicators = false

[[sliders.slides]]
title = "One"
body = "first"

[[sliders.slides]]
title = "Two"
"#,
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    let slider = &config.sliders[0];
    assert_eq!(slider.display_title(), "Gallery");
    assert_eq!(slider.slides.len(), 2);
    assert_eq!(slider.slides[1].body, "");

    let options = slider.options.resolve();
    assert_eq!(options.slide_count(), 2);
    assert!(options.auto_play());
    assert!(options.looping());
    assert_eq!(options.auto_play_interval(), Duration::from_millis(1500));
    assert!(!options.show_indicators());
}

#[test]
fn omitted_options_use_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deck.toml");
    fs::write(
        &path,
        "[[sliders]]\nid = \"plain\"\n\n[[sliders.slides]]\ntitle = \"Only\"\n",
    )
    .expect("write");

    let config = Config::load_from(&path).expect("load");
    let slider = &config.sliders[0];
    assert_eq!(slider.display_title(), "plain");
    let options = slider.options.resolve();
    assert_eq!(options.slide_count(), 3);
    assert!(!options.auto_play());
    assert!(!options.looping());
    assert_eq!(options.auto_play_interval(), Duration::from_millis(3000));
    assert!(options.show_indicators());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deck.toml");
    fs::write(&path, "[[sliders]\nid = ").expect("write");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
    assert!(err.to_string().contains("deck.toml"));
}

#[test]
fn empty_deck_fails_validation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deck.toml");
    fs::write(&path, "sliders = []\n").expect("write");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("At least one slider"), "{err}");
}

#[test]
fn duplicate_ids_fail_validation() {
    let mut config = Config::default();
    config.sliders[1].id = config.sliders[0].id.clone();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate slider id 'players'"), "{err}");
}

#[test]
fn blank_id_fails_validation() {
    let mut config = Config::default();
    config.sliders[0].id = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "{err}");
}

#[test]
fn slider_without_slides_fails_validation() {
    let mut config = Config::default();
    config.sliders[1].slides.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Slider 'stages' has no slides"), "{err}");
}

#[test]
fn printed_default_deck_loads_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("deck.toml");
    fs::write(&path, Config::default().to_toml().expect("toml")).expect("write");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config, Config::default());
}
