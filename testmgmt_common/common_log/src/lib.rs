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

pub mod config;
pub mod logger;

use std::sync::OnceLock;

use crate::config::LogConfig;

static LOGGER: OnceLock<logger::Logger> = OnceLock::new();

/// Initialize the logging system with a config built by the owning service.
///
/// # Example
/// ```no_run
/// use common_log::config::{LogConfig, LoggerConfig};
///
/// let config = LogConfig::root(LoggerConfig {
///     path_prefix: "root".to_string(),
///     log_directory: "logs".to_string(),
///     log_file_name: "accounts.log".to_string(),
///     max_file_size: 10_485_760,
///     max_zip_count: 6,
///     level: "info".to_string(),
/// });
/// common_log::init_with_config(config).expect("Failed to initialize logger");
/// log::info!("Logger initialized");
/// ```
pub fn init_with_config(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let logger = logger::Logger::new_from_config(config)?;
    if LOGGER.set(logger).is_err() {
        return Err("Logger already initialized".into());
    }
    Ok(())
}

// Re-export log macros for convenient use in other modules
pub use log::{debug, error, info, trace, warn};
