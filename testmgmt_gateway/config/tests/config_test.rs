use std::io::Write;

use tempfile::NamedTempFile;

use config_manager::{ConfigError, ConfigSource};
use gateway_config::GatewayConfig;

fn create_valid_config_yaml() -> String {
    r#"
service:
  listen_port: 8080

apis:
  accounts_svc: "http://accounts:8081"
  cms_svc: "http://cms:8082"
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
    let config = GatewayConfig::from_source(&source).expect("Failed to load config");

    assert_eq!(config.service_listen_address(), "127.0.0.1");
    assert_eq!(config.service_listen_port(), 8080);
    assert_eq!(config.apis_accounts_svc(), "http://accounts:8081");
    assert_eq!(config.apis_cms_svc(), "http://cms:8082");
    assert_eq!(config.apis_request_timeout_seconds(), 30);
    assert_eq!(config.logging_log_level(), "INFO");
    assert_eq!(config.logging_log_directory(), "logs");
    assert_eq!(config.logging_log_file(), "gateway.log");
}

/// The gateway cannot start without its downstream service URLs.
#[test]
fn test_missing_downstream_url_fails() {
    let source = ConfigSource::from_yaml_str(
        "service:\n  listen_port: 8080\napis:\n  accounts_svc: http://accounts:8081\n",
    )
    .unwrap();
    let err = GatewayConfig::from_source(&source).unwrap_err();
    match err {
        ConfigError::MissingRequired { section, item } => {
            assert_eq!(section, "apis");
            assert_eq!(item, "cms_svc");
        },
        other => panic!("expected MissingRequired error, got {:?}", other),
    }
}

/// A non-integer listen port fails the load.
#[test]
fn test_malformed_listen_port_fails() {
    let source = ConfigSource::from_yaml_str(
        "service:\n  listen_port: http\napis:\n  accounts_svc: a\n  cms_svc: b\n",
    )
    .unwrap();
    assert!(matches!(
        GatewayConfig::from_source(&source).unwrap_err(),
        ConfigError::Coercion { .. }
    ));
}
