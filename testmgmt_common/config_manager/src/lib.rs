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

/// Configuration management module for loading and accessing service
/// configuration.
///
/// A service declares its schema as a [`ConfigLayout`] (sections of typed
/// items with defaults and valid-value sets), reads raw section/item/value
/// triples into a [`ConfigSource`] (YAML file or environment snapshot), and
/// resolves the two into an immutable [`ConfigManager`]. Resolution happens
/// exactly once at startup; afterwards every lookup is a pure map access,
/// safe under concurrent reads.
///
/// # Features
///
/// * Typed items: text, integer, boolean, and choice-with-valid-values
/// * Default fallback for absent items, hard failure for absent required ones
/// * Environment overlay over file values (`PREFIX__SECTION__ITEM` keys)
/// * Loud (panicking) rejection of lookups the layout does not declare
///
/// # Example
///
/// ```
/// use config_manager::{ConfigLayout, ConfigManager, ConfigSource};
///
/// let layout = ConfigLayout::builder()
///     .section("logging")
///     .choice("log_level", &["DEBUG", "INFO", "WARNING", "ERROR"], "INFO")
///     .section("backend")
///     .required_text("db_filename")
///     .build();
///
/// let source = ConfigSource::from_yaml_str("backend:\n  db_filename: cases.db\n").unwrap();
/// let manager = ConfigManager::load(&layout, &source).unwrap();
///
/// assert_eq!(manager.get_str("logging", "log_level"), "INFO");
/// assert_eq!(manager.get_str("backend", "db_filename"), "cases.db");
/// ```
pub mod error;
pub mod layout;
pub mod locate;
pub mod manager;
pub mod source;

// Re-export key structs
pub use error::ConfigError;
pub use layout::{ConfigLayout, ItemKind, ItemSpec, ItemValue, LayoutBuilder, SectionSpec};
pub use locate::{find_config_path, find_file};
pub use manager::ConfigManager;
pub use source::ConfigSource;
