use queryquill::config::Config;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(config.show_line_numbers);
    assert_eq!(config.indent_size, 2);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8000);
    assert_eq!(config.assets_dir, "web");
    assert_eq!(config.dist_dir, "dist");
    assert_eq!(config.log_level, "info");
    assert!(config.log_file.is_none());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        theme: "nord".to_string(),
        port: 9090,
        log_file: Some("/tmp/queryquill.log".to_string()),
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = \"dracula\"\nshow_line_numbers = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme, "dracula");
    assert!(!config.show_line_numbers);
    assert_eq!(config.port, 8000);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_absent_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_if_exists(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_broken_file_is_reported_not_swallowed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = [unterminated\n").unwrap();

    let err = Config::load_if_exists(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}
