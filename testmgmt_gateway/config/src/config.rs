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

pub const CONFIG_FILE_NAME: &str = "gateway_config.yaml";

const SYSTEM_CONFIG_DIR: &str = "/etc/testmgmt_gateway";
const ENV_PREFIX: &str = "TESTMGMT_GATEWAY";
const LOG_LEVELS: &[&str] = &["DEBUG", "INFO", "WARNING", "ERROR"];

const DEFAULT_LOG_MAX_FILE_SIZE: u64 = 10_485_760;
const DEFAULT_LOG_MAX_ZIP_COUNT: u32 = 6;

pub fn layout() -> ConfigLayout {
    ConfigLayout::builder()
        .section("logging")
        .choice("log_level", LOG_LEVELS, "INFO")
        .text("log_directory", "logs")
        .text("log_file", "gateway.log")
        .section("service")
        .text("listen_address", "127.0.0.1")
        .required_integer("listen_port")
        .section("apis")
        .required_text("accounts_svc")
        .required_text("cms_svc")
        .integer("request_timeout_seconds", 30)
        .build()
}

/// Typed accessor surface over the gateway configuration.
///
/// The `apis` section carries the downstream service base URLs the gateway
/// proxies to; both are required, the gateway cannot start without them.
#[derive(Debug)]
pub struct GatewayConfig {
    manager: ConfigManager,
}

impl GatewayConfig {
    pub fn get_or_init(cli_path: &str) -> Result<Arc<Self>, ConfigError> {
        global().get_or_create(|| Self::load(cli_path))
    }

    pub fn current() -> Option<Arc<Self>> {
        global().get::<Self>()
    }

    pub fn load(cli_path: &str) -> Result<Self, ConfigError> {
        let path = find_config_path(cli_path, CONFIG_FILE_NAME, SYSTEM_CONFIG_DIR)?;
        let source =
            ConfigSource::from_yaml_file(&path)?.overlay(ConfigSource::from_env(ENV_PREFIX));
        let config = Self::from_source(&source)?;
        info!("gateway configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        Ok(GatewayConfig { manager: ConfigManager::load(&layout(), source)? })
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

    pub fn service_listen_address(&self) -> &str {
        self.manager.get_str("service", "listen_address")
    }

    pub fn service_listen_port(&self) -> i64 {
        self.manager.get_i64("service", "listen_port")
    }

    pub fn apis_accounts_svc(&self) -> &str {
        self.manager.get_str("apis", "accounts_svc")
    }

    pub fn apis_cms_svc(&self) -> &str {
        self.manager.get_str("apis", "cms_svc")
    }

    pub fn apis_request_timeout_seconds(&self) -> i64 {
        self.manager.get_i64("apis", "request_timeout_seconds")
    }

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
