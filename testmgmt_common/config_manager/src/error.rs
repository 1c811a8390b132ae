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

/// Configuration error enumeration.
///
/// Every variant is fatal at load time: the owning service aborts startup
/// rather than running with a partial configuration. Lookups against an
/// undeclared key are not represented here — that is a programming-contract
/// violation and panics at the call site.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    File(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("could not find configuration file '{0}'")]
    NotFound(String),

    #[error("invalid value for {section}.{item}: expected {expected}, got '{value}'")]
    Coercion { section: String, item: String, expected: &'static str, value: String },

    #[error("invalid value for {section}.{item}: '{value}' is not one of {allowed:?}")]
    InvalidChoice { section: String, item: String, value: String, allowed: Vec<String> },

    #[error("missing required configuration: {section}.{item}")]
    MissingRequired { section: String, item: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
