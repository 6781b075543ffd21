//! Tests for config file loading.

use love_arcade::config::ArcadeConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_a_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arcade.toml");
    fs::write(
        &path,
        r#"player_a = "Mina"
player_b = "Theo"
accepted_name = "Mina"
muted = true
"#,
    )
    .unwrap();

    let config = ArcadeConfig::from_file(&path).unwrap();
    assert_eq!(config.player_a(), "Mina");
    assert_eq!(config.player_b(), "Theo");
    assert_eq!(config.accepted_name(), "Mina");
    assert!(*config.muted());
}

#[test]
fn partial_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "muted = true\n").unwrap();

    let config = ArcadeConfig::from_file(&path).unwrap();
    assert_eq!(config.player_a(), "Adi");
    assert_eq!(config.player_b(), "Dev");
    assert!(*config.muted());
}

#[test]
fn a_missing_file_is_an_error() {
    let err = ArcadeConfig::from_file("/no/such/arcade.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "player_a = [not toml").unwrap();

    let err = ArcadeConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
