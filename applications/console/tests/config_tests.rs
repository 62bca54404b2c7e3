/// Configuration loading and validation
use lendboard_console::config::ConsoleConfig;
use lendboard_core::PageSize;
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
fn defaults_are_valid() {
    let config = ConsoleConfig::default();
    config.validate().expect("defaults should validate");

    assert_eq!(config.source.url, "http://localhost:3000");
    assert!(config.source.file.is_none());
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.page_size().unwrap(), PageSize::Ten);
}

#[test]
fn loads_sections_from_file() {
    let file = write_config(
        r#"
[source]
url = "http://dashboard.internal:8080"
timeout_secs = 5

[storage]
database_url = "sqlite://./tmp/edits.db"

[list]
page_size = 50
"#,
    );

    let config = ConsoleConfig::load(Some(file.path())).expect("Failed to load config");

    assert_eq!(config.source.url, "http://dashboard.internal:8080");
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.storage.database_url, "sqlite://./tmp/edits.db");
    assert_eq!(config.page_size().unwrap(), PageSize::Fifty);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_config(
        r#"
[source]
file = "users.json"
"#,
    );

    let config = ConsoleConfig::load(Some(file.path())).expect("Failed to load config");

    assert_eq!(
        config.source.file.as_deref(),
        Some(std::path::Path::new("users.json"))
    );
    assert_eq!(config.source.url, "http://localhost:3000");
    assert_eq!(config.list.page_size, 10);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(ConsoleConfig::load(Some(&path)).is_err());
}

#[test]
fn rejects_unsupported_page_size() {
    let mut config = ConsoleConfig::default();
    config.list.page_size = 25;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("page size"));
}

#[test]
fn rejects_empty_url_without_file() {
    let mut config = ConsoleConfig::default();
    config.source.url = "   ".to_string();
    assert!(config.validate().is_err());

    config.source.file = Some("users.json".into());
    assert!(config.validate().is_ok());
}

#[test]
fn rejects_zero_timeout() {
    let mut config = ConsoleConfig::default();
    config.source.timeout_secs = 0;
    assert!(config.validate().is_err());
}
