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

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use serde_yaml::Value;

use crate::error::ConfigError;

/// Raw section/item/value triples read from a backing store.
///
/// The source carries strings only; type coercion happens when a
/// [`ConfigManager`](crate::ConfigManager) loads the source against a layout.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigSource {
    pub fn empty() -> Self {
        ConfigSource::default()
    }

    /// Reads a two-level YAML mapping (section -> item -> scalar) from a file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a two-level YAML mapping from a string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(contents)?;
        let mut source = ConfigSource::empty();
        let Value::Mapping(sections) = value else {
            return Err(ConfigError::Parse(
                "configuration document must be a mapping of sections".to_string(),
            ));
        };
        for (section_key, section_value) in sections {
            let section = scalar_to_string(&section_key).ok_or_else(|| {
                ConfigError::Parse("section names must be scalars".to_string())
            })?;
            let Value::Mapping(items) = section_value else {
                return Err(ConfigError::Parse(format!(
                    "section '{}' must be a mapping of items",
                    section
                )));
            };
            for (item_key, item_value) in items {
                let item = scalar_to_string(&item_key).ok_or_else(|| {
                    ConfigError::Parse(format!("item names in '{}' must be scalars", section))
                })?;
                if item_value.is_null() {
                    continue;
                }
                let raw = scalar_to_string(&item_value).ok_or_else(|| {
                    ConfigError::Parse(format!(
                        "value of {}.{} must be a scalar",
                        section, item
                    ))
                })?;
                source.set(&section, &item, &raw);
            }
        }
        Ok(source)
    }

    /// Snapshots the process environment.
    ///
    /// Keys have the shape `PREFIX__SECTION__ITEM`; the double underscore
    /// separates the levels so that item names may themselves contain single
    /// underscores. Section and item names are lowercased.
    pub fn from_env(prefix: &str) -> Self {
        let mut source = ConfigSource::empty();
        let marker = format!("{}__", prefix);
        for (key, value) in env::vars() {
            let Some(rest) = key.strip_prefix(&marker) else {
                continue;
            };
            let Some((section, item)) = rest.split_once("__") else {
                continue;
            };
            if section.is_empty() || item.is_empty() {
                continue;
            }
            source.set(&section.to_lowercase(), &item.to_lowercase(), &value);
        }
        source
    }

    /// Lays `other` over this source; on overlap, `other` wins.
    pub fn overlay(mut self, other: ConfigSource) -> Self {
        for (section, items) in other.entries {
            let target = self.entries.entry(section).or_default();
            for (item, raw) in items {
                target.insert(item, raw);
            }
        }
        self
    }

    pub fn set(&mut self, section: &str, item: &str, raw: &str) {
        self.entries
            .entry(section.to_string())
            .or_default()
            .insert(item.to_string(), raw.to_string());
    }

    pub fn get(&self, section: &str, item: &str) -> Option<&str> {
        self.entries.get(section)?.get(item).map(String::as_str)
    }

    /// Iterates every triple in the source.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.entries.iter().flat_map(|(section, items)| {
            items
                .iter()
                .map(move |(item, raw)| (section.as_str(), item.as_str(), raw.as_str()))
        })
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
