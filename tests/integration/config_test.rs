use std::fs;
use tempfile::TempDir;
use thermbar::core::config::{Config, OutputFormat};
use thermbar::core::MissingLabelPolicy;
use thermbar::ThermbarError;

#[test]
fn test_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "  \n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_load_corrupt_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ThermbarError::Config(_)));
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let config = Config {
        single_line: false,
        pos_ram: Some(2),
        missing_label: MissingLabelPolicy::Skip,
        format: OutputFormat::Plain,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_sensor_entry_from_json() {
    let json = r##"{
        "sensors": [
            {
                "device": {
                    "kind": "core_complex",
                    "name": "k10temp",
                    "hwmon_index": 6,
                    "channels": 8,
                    "label_filter": "tccd"
                },
                "color": "#ffffff",
                "category": "CCD",
                "target_label": "Tccd1"
            }
        ]
    }"##;
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, json).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.sensors.len(), 1);

    let entry = &config.sensors[0];
    assert_eq!(entry.device.hwmon_index, 6);
    assert_eq!(entry.device.label_filter.as_deref(), Some("tccd"));
    assert!(entry.show_detail);
}
