//! Unit tests for settings loading.

use flowboard::settings::default_settings_path;
use flowboard::zoom::WheelDirection;
use flowboard::{CanvasError, CanvasSettings};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_partial_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "zoom_speed": 0.2, "wheel_direction": "positive_delta_zooms_in" }"#,
    )
    .unwrap();

    let settings = CanvasSettings::load(&path).unwrap();
    assert_eq!(settings.zoom_speed, 0.2);
    assert_eq!(settings.wheel_direction, WheelDirection::PositiveDeltaZoomsIn);
    assert_eq!(settings.zoom_limits, CanvasSettings::default().zoom_limits);
    assert_eq!(settings.node_size, CanvasSettings::default().node_size);
}

#[test]
fn test_empty_object_is_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}").unwrap();

    assert_eq!(CanvasSettings::load(&path).unwrap(), CanvasSettings::default());
}

#[test]
fn test_invalid_limits_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "zoom_limits": { "min": 3.0, "max": 2.0 } }"#).unwrap();

    assert!(matches!(
        CanvasSettings::load(&path),
        Err(CanvasError::InvalidZoomLimits { .. })
    ));
}

#[test]
fn test_initial_viewport_outside_limits_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "initial_viewport": { "translate_x": 0.0, "translate_y": 0.0, "scale": 3.0 } }"#,
    )
    .unwrap();

    assert!(matches!(
        CanvasSettings::load(&path),
        Err(CanvasError::InvalidScale(_))
    ));
}

#[test]
fn test_malformed_json_and_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(CanvasSettings::load(&path), Err(CanvasError::Json(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(CanvasSettings::load(&missing), Err(CanvasError::Io(_))));
}

#[test]
fn test_default_paths() {
    // Should return Some on most systems
    let path = default_settings_path();
    assert!(path.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = path {
        assert!(path.ends_with("flowboard/settings.json"));
    }
}

#[test]
fn test_session_rejects_store_scale_outside_limits() {
    use flowboard::{CanvasSession, MemoryStore, Viewport};

    let store = MemoryStore::seeded(Viewport::new(0.0, 0.0, 5.0).unwrap()).unwrap();
    assert!(matches!(
        CanvasSession::with_store(store, CanvasSettings::default()),
        Err(CanvasError::InvalidScale(_))
    ));
}
