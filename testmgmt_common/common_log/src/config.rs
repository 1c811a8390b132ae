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

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub loggers: Vec<LoggerConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    pub path_prefix: String,
    pub log_directory: String,
    pub log_file_name: String,
    pub max_file_size: u64,
    pub max_zip_count: u32,
    pub level: String,
}

impl LogConfig {
    /// A single root logger, the common case for the suite's services.
    pub fn root(logger: LoggerConfig) -> Self {
        LogConfig { loggers: vec![logger] }
    }

    pub fn get_logger_config(&self, path_prefix: &str) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|l| path_prefix.starts_with(&l.path_prefix))
    }

    pub fn get_root_config(&self) -> Option<&LoggerConfig> {
        self.get_logger_config("root")
    }
}
