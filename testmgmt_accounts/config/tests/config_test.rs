use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use accounts_config::AccountsConfig;
use config_manager::{ConfigError, ConfigSource};

/// A valid accounts configuration with every section populated.
fn create_valid_config_yaml() -> String {
    r#"
logging:
  log_level: "DEBUG"
  log_directory: "logs"
  log_file: "accounts.log"

backend:
  db_filename: "accounts.db"

service:
  listen_address: "0.0.0.0"
  listen_port: 8081

security:
  token_ttl_seconds: 900
"#
    .to_string()
}

fn create_temp_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

/// The facade initializes once through the shared registry and every later
/// call observes the same instance with the loaded values.
#[test]
fn test_get_or_init_registers_single_instance() {
    let temp_file = create_temp_config_file(&create_valid_config_yaml());
    let config_path = temp_file.path().to_str().unwrap();

    let config = AccountsConfig::get_or_init(config_path).expect("Failed to load config");

    assert_eq!(config.logging_log_level(), "DEBUG");
    assert_eq!(config.backend_db_filename(), "accounts.db");
    assert_eq!(config.service_listen_address(), "0.0.0.0");
    assert_eq!(config.service_listen_port(), 8081);
    assert_eq!(config.security_token_ttl_seconds(), 900);

    // A second call must not reload, even with a different path.
    let again = AccountsConfig::get_or_init("does_not_exist.yaml")
        .expect("fast path should not touch the file system");
    assert!(Arc::ptr_eq(&config, &again));

    let current = AccountsConfig::current().expect("instance should be registered");
    assert!(Arc::ptr_eq(&config, &current));
}

/// Optional items fall back to their layout defaults.
#[test]
fn test_defaults_cover_absent_items() {
    let source = ConfigSource::from_yaml_str(
        "backend:\n  db_filename: accounts.db\nservice:\n  listen_port: 8081\n",
    )
    .unwrap();
    let config = AccountsConfig::from_source(&source).expect("Failed to load config");

    assert_eq!(config.logging_log_level(), "INFO");
    assert_eq!(config.logging_log_directory(), "logs");
    assert_eq!(config.logging_log_file(), "accounts.log");
    assert_eq!(config.service_listen_address(), "127.0.0.1");
    assert_eq!(config.security_token_ttl_seconds(), 3600);
}

/// Omitting the backend database filename fails the load.
#[test]
fn test_missing_db_filename_fails() {
    let source = ConfigSource::from_yaml_str("service:\n  listen_port: 8081\n").unwrap();
    let err = AccountsConfig::from_source(&source).unwrap_err();
    match err {
        ConfigError::MissingRequired { section, item } => {
            assert_eq!(section, "backend");
            assert_eq!(item, "db_filename");
        },
        other => panic!("expected MissingRequired error, got {:?}", other),
    }
}

/// A log level outside the valid set fails the load.
#[test]
fn test_invalid_log_level_fails() {
    let source = ConfigSource::from_yaml_str(
        "logging:\n  log_level: TRACE\nbackend:\n  db_filename: accounts.db\nservice:\n  listen_port: 8081\n",
    )
    .unwrap();
    assert!(matches!(
        AccountsConfig::from_source(&source).unwrap_err(),
        ConfigError::InvalidChoice { .. }
    ));
}
