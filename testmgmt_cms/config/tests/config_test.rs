use std::io::Write;

use tempfile::NamedTempFile;

use cms_config::CmsConfig;
use config_manager::{ConfigError, ConfigSource};

fn create_valid_config_yaml() -> String {
    r#"
logging:
  log_level: "WARNING"

backend:
  db_filename: "cases.db"

service:
  listen_port: 8082

limits:
  max_case_size_kb: 512
  attachments_enabled: false
"#
    .to_string()
}

fn create_temp_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

/// Every accessor translates to the value loaded for its section/item pair;
/// absent optional items resolve to their defaults.
#[test]
fn test_accessors_translate_section_item_pairs() {
    let temp_file = create_temp_config_file(&create_valid_config_yaml());
    let source = ConfigSource::from_yaml_file(temp_file.path()).expect("Failed to read config");
    let config = CmsConfig::from_source(&source).expect("Failed to load config");

    assert_eq!(config.logging_log_level(), "WARNING");
    assert_eq!(config.logging_log_directory(), "logs");
    assert_eq!(config.logging_log_file(), "cms.log");
    assert_eq!(config.backend_db_filename(), "cases.db");
    assert_eq!(config.service_listen_address(), "127.0.0.1");
    assert_eq!(config.service_listen_port(), 8082);
    assert_eq!(config.limits_max_case_size_kb(), 512);
    assert!(!config.limits_attachments_enabled());
}

/// The limits section falls back to its defaults when omitted entirely.
#[test]
fn test_limits_defaults() {
    let source = ConfigSource::from_yaml_str(
        "backend:\n  db_filename: cases.db\nservice:\n  listen_port: 8082\n",
    )
    .unwrap();
    let config = CmsConfig::from_source(&source).expect("Failed to load config");

    assert_eq!(config.limits_max_case_size_kb(), 256);
    assert!(config.limits_attachments_enabled());
}

/// Omitting the backend database filename fails the load.
#[test]
fn test_missing_db_filename_fails() {
    let source = ConfigSource::from_yaml_str("service:\n  listen_port: 8082\n").unwrap();
    let err = CmsConfig::from_source(&source).unwrap_err();
    match err {
        ConfigError::MissingRequired { section, item } => {
            assert_eq!(section, "backend");
            assert_eq!(item, "db_filename");
        },
        other => panic!("expected MissingRequired error, got {:?}", other),
    }
}

/// A non-boolean attachments flag fails the load.
#[test]
fn test_malformed_attachments_flag_fails() {
    let source = ConfigSource::from_yaml_str(
        "backend:\n  db_filename: cases.db\nservice:\n  listen_port: 8082\nlimits:\n  attachments_enabled: maybe\n",
    )
    .unwrap();
    assert!(matches!(
        CmsConfig::from_source(&source).unwrap_err(),
        ConfigError::Coercion { .. }
    ));
}
