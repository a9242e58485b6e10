use pointbrowse::{BrowserConfig, ConfigError};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("pointbrowse-test-{}", std::process::id()))
        .join(name)
}

#[test]
fn defaults_match_documented_values() {
    let cfg = BrowserConfig::default();
    assert_eq!(cfg.navigator.pick_radius, 5.0);
    assert_eq!(cfg.navigator.focus_step, 0.1);
    assert_eq!(cfg.navigator.focus_radius, 0.25);
    assert_eq!(cfg.navigator.pan.margin, 0.1);
    assert!(!cfg.navigator.pan.centered);
    assert_eq!(cfg.columns.x, "x");
    assert_eq!(cfg.columns.y, "y");
    assert!(cfg.columns.key.is_none());
}

#[test]
fn save_and_load_round_trip() {
    let path = temp_path("roundtrip.yaml");
    let mut cfg = BrowserConfig::default();
    cfg.title = "Custom".to_string();
    cfg.navigator.pan.centered = true;
    cfg.columns.key = Some("id".to_string());
    cfg.save_to(&path).unwrap();

    let loaded = BrowserConfig::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_yaml_fills_defaults() {
    let cfg: BrowserConfig = serde_yaml::from_str("title: Partial\nnavigator:\n  focus_step: 0.5\n").unwrap();
    assert_eq!(cfg.title, "Partial");
    assert_eq!(cfg.navigator.focus_step, 0.5);
    assert_eq!(cfg.navigator.pick_radius, 5.0);
    assert_eq!(cfg.hotkeys, BrowserConfig::default().hotkeys);
}

#[test]
fn missing_file_is_reported() {
    let path = temp_path("does-not-exist.yaml");
    assert!(matches!(BrowserConfig::load_from(&path), Err(ConfigError::Missing(_))));
}

#[test]
fn invalid_yaml_is_reported() {
    let path = temp_path("invalid.yaml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "navigator: [not, a, map]\n").unwrap();
    assert!(matches!(BrowserConfig::load_from(&path), Err(ConfigError::Yaml(_))));
    let _ = std::fs::remove_file(&path);
}
