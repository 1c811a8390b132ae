/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Test Management Suite is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::sync::Arc;

use common_log::config::{LogConfig, LoggerConfig};
use config_manager::{find_config_path, ConfigError, ConfigLayout, ConfigManager, ConfigSource};
use log::info;
use singleton_registry::global;

/// Configuration file is looked up in the following priority order:
/// 1. Command line specified path (if provided and the file exists)
/// 2. Current working directory: ./accounts_config.yaml
/// 3. System-wide configuration: /etc/testmgmt_accounts/accounts_config.yaml
pub const CONFIG_FILE_NAME: &str = "accounts_config.yaml";

const SYSTEM_CONFIG_DIR: &str = "/etc/testmgmt_accounts";
const ENV_PREFIX: &str = "TESTMGMT_ACCOUNTS";
const LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARNING", "ERROR"];

const DEFAULT_LOG_MAX_FILE_SIZE: u64 = 10_485_760;
const DEFAULT_LOG_MAX_ZIP_COUNT: u32 = 6;

/// The accounts service configuration schema.
pub fn layout() -> ConfigLayout {
    ConfigLayout::builder()
        .section("logging")
        .choice("log_level", LOG_LEVELS, "INFO")
        .text("log_directory", "logs")
        .text("log_file", "accounts.log")
        .section("backend")
        .required_text("db_filename")
        .section("service")
        .text("listen_address", "127.0.0.1")
        .required_integer("listen_port")
        .section("security")
        .integer("token_ttl_seconds", 3600)
        .build()
}

/// Typed accessor surface over the accounts service configuration.
///
/// Holds the loaded [`ConfigManager`] by composition; every accessor is a
/// pure translation to one `(section, item)` lookup. The process-wide
/// instance lives in the shared singleton registry and is constructed at
/// most once, on the first [`AccountsConfig::get_or_init`] call.
#[derive(Debug)]
pub struct AccountsConfig {
    manager: ConfigManager,
}

impl AccountsConfig {
    /// Returns the process-wide instance, loading the configuration on the
    /// first call. A load failure is returned to the caller and nothing is
    /// registered, so a later call retries.
    pub fn get_or_init(cli_path: &str) -> Result<Arc<Self>, ConfigError> {
        global().get_or_create(|| Self::load(cli_path))
    }

    /// The already-initialized process-wide instance, if any. Request
    /// handlers use this; `None` means startup has not completed.
    pub fn current() -> Option<Arc<Self>> {
        global().get::<Self>()
    }

    /// Loads an uncached instance: file discovery, environment overlay,
    /// schema resolution.
    pub fn load(cli_path: &str) -> Result<Self, ConfigError> {
        let path = find_config_path(cli_path, CONFIG_FILE_NAME, SYSTEM_CONFIG_DIR)?;
        let source =
            ConfigSource::from_yaml_file(&path)?.overlay(ConfigSource::from_env(ENV_PREFIX));
        let config = Self::from_source(&source)?;
        info!("accounts configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Resolves an already-assembled source against the accounts layout.
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        Ok(AccountsConfig { manager: ConfigManager::load(&layout(), source)? })
    }

    pub fn logging_log_level(&self) -> &str {
        self.manager.get_str("logging", "log_level")
    }

    pub fn logging_log_directory(&self) -> &str {
        self.manager.get_str("logging", "log_directory")
    }

    pub fn logging_log_file(&self) -> &str {
        self.manager.get_str("logging", "log_file")
    }

    pub fn backend_db_filename(&self) -> &str {
        self.manager.get_str("backend", "db_filename")
    }

    pub fn service_listen_address(&self) -> &str {
        self.manager.get_str("service", "listen_address")
    }

    pub fn service_listen_port(&self) -> i64 {
        self.manager.get_i64("service", "listen_port")
    }

    pub fn security_token_ttl_seconds(&self) -> i64 {
        self.manager.get_i64("security", "token_ttl_seconds")
    }

    /// Wires the `logging` section into the shared logging stack.
    pub fn init_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        common_log::init_with_config(LogConfig::root(LoggerConfig {
            path_prefix: "root".to_string(),
            log_directory: self.logging_log_directory().to_string(),
            log_file_name: self.logging_log_file().to_string(),
            max_file_size: DEFAULT_LOG_MAX_FILE_SIZE,
            max_zip_count: DEFAULT_LOG_MAX_ZIP_COUNT,
            level: self.logging_log_level().to_lowercase(),
        }))
    }
}
