use diwkit_designer::PlateShape;
use diwkit_settings::{Config, ConfigError, SettingValue, SettingsError, SettingsManager};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_or_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    assert!(!path.exists());

    let manager = SettingsManager::load_or_init(&path).unwrap();
    assert!(path.exists());
    assert_eq!(manager.config(), &Config::default());

    let written = fs::read_to_string(&path).unwrap();
    for section in ["[sketch]", "[serpentine]", "[segment]", "[printer]", "[purge]", "[gcode]"] {
        assert!(written.contains(section), "missing {}", section);
    }
}

#[test]
fn test_load_or_init_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[serpentine]\nx_width = 42.0\n").unwrap();

    let manager = SettingsManager::load_or_init(&path).unwrap();
    assert_eq!(manager.value("x_width"), Ok(SettingValue::Float(42.0)));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[serpentine]\nx_width = 42.0\n"
    );
}

#[test]
fn test_save_after_update() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let mut manager = SettingsManager::load_or_init(&path).unwrap();
    manager.set_value("plate_shape", "squared").unwrap();
    manager.set_value("number_of_layers", "4").unwrap();
    manager.save().unwrap();

    let reloaded = SettingsManager::load(&path).unwrap();
    assert_eq!(reloaded.config().printer.plate_shape, PlateShape::Squared);
    assert_eq!(reloaded.value("number_of_layers"), Ok(SettingValue::Integer(4)));
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut config = Config::default();
    config.gcode.filename = "sample".to_string();
    config.save_to_file(&path).unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.ini");
    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[sketch]\nlayer_height = -1.0\n").unwrap();
    let err = SettingsManager::load(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { .. })
    ));

    fs::write(&path, "[sketch\n").unwrap();
    assert!(matches!(
        SettingsManager::load(&path).unwrap_err(),
        SettingsError::TomlError(_)
    ));
}
