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

use serde::Serialize;

/// A resolved configuration value.
///
/// Choice-typed items resolve to `Text`; the membership check happens at
/// load time, after which the value is an ordinary string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl ItemValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ItemValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ItemValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ItemValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ItemValue::Text(_) => "text",
            ItemValue::Integer(_) => "integer",
            ItemValue::Boolean(_) => "boolean",
        }
    }
}

/// The declared data type of a configuration item.
#[derive(Debug, Clone)]
pub enum ItemKind {
    Text,
    Integer,
    Boolean,
    /// A string restricted to a fixed set of valid values.
    Choice(Vec<String>),
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Integer => "integer",
            ItemKind::Boolean => "boolean",
            ItemKind::Choice(_) => "choice",
        }
    }
}

/// One declared configuration item.
///
/// An item either carries a default or is required; a required item with no
/// value in the backing source fails the load.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub name: String,
    pub kind: ItemKind,
    pub default: Option<ItemValue>,
    pub required: bool,
}

/// A named group of items.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub name: String,
    pub items: Vec<ItemSpec>,
}

/// The immutable schema declaring every valid section and item.
///
/// Built once at process start through [`ConfigLayout::builder`]; schema
/// mistakes (duplicate names, a choice default outside its valid set) are
/// programming errors and panic at build time.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayout {
    sections: Vec<SectionSpec>,
}

impl ConfigLayout {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder { sections: Vec::new() }
    }

    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Looks up the declaration for `(section, item)`, if present.
    pub fn item(&self, section: &str, item: &str) -> Option<&ItemSpec> {
        self.sections
            .iter()
            .find(|s| s.name == section)?
            .items
            .iter()
            .find(|i| i.name == item)
    }
}

/// Builder for [`ConfigLayout`].
pub struct LayoutBuilder {
    sections: Vec<SectionSpec>,
}

impl LayoutBuilder {
    /// Opens a new section; later item calls append to it.
    pub fn section(mut self, name: &str) -> Self {
        if self.sections.iter().any(|s| s.name == name) {
            panic!("layout already declares section '{}'", name);
        }
        self.sections.push(SectionSpec { name: name.to_string(), items: Vec::new() });
        self
    }

    pub fn text(self, name: &str, default: &str) -> Self {
        self.push(name, ItemKind::Text, Some(ItemValue::Text(default.to_string())), false)
    }

    pub fn integer(self, name: &str, default: i64) -> Self {
        self.push(name, ItemKind::Integer, Some(ItemValue::Integer(default)), false)
    }

    pub fn boolean(self, name: &str, default: bool) -> Self {
        self.push(name, ItemKind::Boolean, Some(ItemValue::Boolean(default)), false)
    }

    pub fn choice(self, name: &str, allowed: &[&str], default: &str) -> Self {
        if !allowed.contains(&default) {
            panic!("default '{}' for item '{}' is not in its valid set {:?}", default, name, allowed);
        }
        let kind = ItemKind::Choice(allowed.iter().map(|v| v.to_string()).collect());
        self.push(name, kind, Some(ItemValue::Text(default.to_string())), false)
    }

    pub fn required_text(self, name: &str) -> Self {
        self.push(name, ItemKind::Text, None, true)
    }

    pub fn required_integer(self, name: &str) -> Self {
        self.push(name, ItemKind::Integer, None, true)
    }

    pub fn required_boolean(self, name: &str) -> Self {
        self.push(name, ItemKind::Boolean, None, true)
    }

    pub fn required_choice(self, name: &str, allowed: &[&str]) -> Self {
        let kind = ItemKind::Choice(allowed.iter().map(|v| v.to_string()).collect());
        self.push(name, kind, None, true)
    }

    pub fn build(self) -> ConfigLayout {
        ConfigLayout { sections: self.sections }
    }

    fn push(
        mut self,
        name: &str,
        kind: ItemKind,
        default: Option<ItemValue>,
        required: bool,
    ) -> Self {
        let section = self
            .sections
            .last_mut()
            .unwrap_or_else(|| panic!("item '{}' declared before any section", name));
        if section.items.iter().any(|i| i.name == name) {
            panic!("section '{}' already declares item '{}'", section.name, name);
        }
        section.items.push(ItemSpec { name: name.to_string(), kind, default, required });
        self
    }
}
