//! Configuration system tests
//!
//! Tests for config paths and dock config loading/saving.

use tabdock::config::DockConfig;
use tabdock::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("tabdock"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Dock Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = DockConfig::default();
    assert_eq!(config.drag_threshold, 5.0);
    assert_eq!(config.edge_band, 0.25);
    assert_eq!(config.overlay_fraction, 0.5);
    assert_eq!(config.splitter_width, 6.0);
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = DockConfig::from_yaml_str("edge_band: 0.2\n").unwrap();
    assert_eq!(config.edge_band, 0.2);
    assert_eq!(config.drag_threshold, 5.0);
    assert_eq!(config.splitter_width, 6.0);

    let empty = DockConfig::from_yaml_str("{}").unwrap();
    assert_eq!(empty, DockConfig::default());
}

#[test]
fn test_out_of_range_values_are_replaced() {
    let yaml = "edge_band: 0.8\noverlay_fraction: 0.0\ndrag_threshold: -3.0\nsplitter_width: 2.0\n";
    let config = DockConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.edge_band, 0.25);
    assert_eq!(config.overlay_fraction, 0.5);
    assert_eq!(config.drag_threshold, 5.0);
    assert_eq!(config.splitter_width, 2.0);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(DockConfig::from_yaml_str("edge_band: [1, 2]").is_err());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = DockConfig {
        drag_threshold: 8.0,
        edge_band: 0.3,
        overlay_fraction: 0.4,
        splitter_width: 4.0,
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    assert_eq!(DockConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert_eq!(DockConfig::load_from(&path), DockConfig::default());
}

#[test]
fn test_load_unparsable_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "drag_threshold: lots\n").unwrap();
    assert_eq!(DockConfig::load_from(&path), DockConfig::default());
}
