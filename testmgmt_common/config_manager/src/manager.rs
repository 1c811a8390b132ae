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

use log::warn;

use crate::error::ConfigError;
use crate::layout::{ConfigLayout, ItemKind, ItemValue};
use crate::source::ConfigSource;

/// A loaded, typed configuration document.
///
/// `load` resolves every declared item once; after that the manager is
/// immutable and `get_entry` is a pure map lookup, safe to call concurrently
/// from any number of request handlers without locking.
#[derive(Debug)]
pub struct ConfigManager {
    values: BTreeMap<(String, String), ItemValue>,
}

impl ConfigManager {
    /// Resolves `source` against `layout`.
    ///
    /// Every value present in the source is coerced to its declared type
    /// (choice items must be members of their valid set); absent items fall
    /// back to their declared default; a required item with neither fails
    /// with [`ConfigError::MissingRequired`]. Triples in the source that the
    /// layout does not declare are ignored with a warning.
    pub fn load(layout: &ConfigLayout, source: &ConfigSource) -> Result<Self, ConfigError> {
        let mut values = BTreeMap::new();
        for section in layout.sections() {
            for item in &section.items {
                let key = (section.name.clone(), item.name.clone());
                match source.get(&section.name, &item.name) {
                    Some(raw) => {
                        let value = coerce(raw, &item.kind, &section.name, &item.name)?;
                        values.insert(key, value);
                    },
                    None => match &item.default {
                        Some(default) => {
                            values.insert(key, default.clone());
                        },
                        None => {
                            return Err(ConfigError::MissingRequired {
                                section: section.name.clone(),
                                item: item.name.clone(),
                            });
                        },
                    },
                }
            }
        }

        for (section, item, _) in source.entries() {
            if layout.item(section, item).is_none() {
                warn!("ignoring undeclared configuration key {}.{}", section, item);
            }
        }

        Ok(ConfigManager { values })
    }

    /// Returns the resolved value for `(section, item)`.
    ///
    /// # Panics
    ///
    /// Panics if the layout does not declare `(section, item)`. Asking for an
    /// undeclared key is a programming error, not a runtime condition, and
    /// must fail loudly instead of yielding a default.
    pub fn get_entry(&self, section: &str, item: &str) -> &ItemValue {
        self.values
            .get(&(section.to_string(), item.to_string()))
            .unwrap_or_else(|| {
                panic!("unknown configuration key {}.{}: not declared in the layout", section, item)
            })
    }

    /// Returns the text value of `(section, item)`.
    ///
    /// # Panics
    ///
    /// Panics on an undeclared key or a non-text item.
    pub fn get_str(&self, section: &str, item: &str) -> &str {
        let value = self.get_entry(section, item);
        value.as_str().unwrap_or_else(|| {
            panic!("configuration key {}.{} is {}, not text", section, item, value.kind_name())
        })
    }

    /// Returns the integer value of `(section, item)`.
    ///
    /// # Panics
    ///
    /// Panics on an undeclared key or a non-integer item.
    pub fn get_i64(&self, section: &str, item: &str) -> i64 {
        let value = self.get_entry(section, item);
        value.as_i64().unwrap_or_else(|| {
            panic!("configuration key {}.{} is {}, not integer", section, item, value.kind_name())
        })
    }

    /// Returns the boolean value of `(section, item)`.
    ///
    /// # Panics
    ///
    /// Panics on an undeclared key or a non-boolean item.
    pub fn get_bool(&self, section: &str, item: &str) -> bool {
        let value = self.get_entry(section, item);
        value.as_bool().unwrap_or_else(|| {
            panic!("configuration key {}.{} is {}, not boolean", section, item, value.kind_name())
        })
    }

    /// Serializes the resolved document to JSON, for startup diagnostics.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let mut document: BTreeMap<&str, BTreeMap<&str, &ItemValue>> = BTreeMap::new();
        for ((section, item), value) in &self.values {
            document.entry(section.as_str()).or_default().insert(item.as_str(), value);
        }
        Ok(serde_json::to_string(&document)?)
    }
}

fn coerce(raw: &str, kind: &ItemKind, section: &str, item: &str) -> Result<ItemValue, ConfigError> {
    match kind {
        ItemKind::Text => Ok(ItemValue::Text(raw.to_string())),
        ItemKind::Integer => raw.trim().parse::<i64>().map(ItemValue::Integer).map_err(|_| {
            ConfigError::Coercion {
                section: section.to_string(),
                item: item.to_string(),
                expected: "integer",
                value: raw.to_string(),
            }
        }),
        ItemKind::Boolean => match raw.trim().to_lowercase().as_str() {
            "true" | "1" => Ok(ItemValue::Boolean(true)),
            "false" | "0" => Ok(ItemValue::Boolean(false)),
            _ => Err(ConfigError::Coercion {
                section: section.to_string(),
                item: item.to_string(),
                expected: "boolean",
                value: raw.to_string(),
            }),
        },
        ItemKind::Choice(allowed) => {
            if allowed.iter().any(|v| v == raw) {
                Ok(ItemValue::Text(raw.to_string()))
            } else {
                Err(ConfigError::InvalidChoice {
                    section: section.to_string(),
                    item: item.to_string(),
                    value: raw.to_string(),
                    allowed: allowed.clone(),
                })
            }
        },
    }
}
