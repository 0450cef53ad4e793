//! Tests for loading the terminal client config from disk.

use rewind_tictactoe::ListOrder;
use rewind_tui::TuiConfig;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
descending = true
log_file = "/tmp/rewind-test.log"
log_filter = "rewind_tictactoe=debug"
"#
    )
    .unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.list_order(), ListOrder::Descending);
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "rewind_tictactoe=debug");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "descending = false").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "descending = \"sometimes\"").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
