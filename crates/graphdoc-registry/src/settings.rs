// Copyright 2025 Graphtide Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration-setting registry
//!
//! Documentable settings are registered explicitly through [`SettingBuilder`]
//! rather than discovered by runtime introspection. Each component of the
//! database product registers the settings it owns; the config docs generator
//! then walks the registry in one pass.

use graphdoc_core::{Attribute, DocumentableRecord, anchor_id};
use serde::{Deserialize, Serialize};

/// One documentable configuration setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Fully qualified setting name, for example `db.tx_log.rotation.size`
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Accepted value syntax, human-readable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_values: Option<String>,
    /// Default value as the product renders it, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Deprecation message naming the replacement, if deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    /// Internal settings are excluded from public documentation
    #[serde(default)]
    pub internal: bool,
}

impl Setting {
    /// Anchor id for the per-setting detail block
    pub fn anchor(&self) -> String {
        format!("config_{}", anchor_id(&self.name))
    }

    /// Reduce to the uniform record shape
    pub fn to_record(&self) -> DocumentableRecord {
        let mut record = DocumentableRecord::new(&self.name, &self.description)
            .with_id(self.anchor());
        if let Some(values) = &self.valid_values {
            record = record.with_attribute(Attribute::new("Valid values", values));
        }
        if let Some(default) = &self.default_value {
            record = record.with_attribute(Attribute::new("Default value", default));
        }
        if let Some(message) = &self.deprecated {
            record = record.with_attribute(Attribute::new("Deprecated", message).flagged("deprecated"));
        }
        record
    }
}

/// Builder for one [`Setting`]
#[derive(Debug)]
pub struct SettingBuilder<'a> {
    registry: &'a mut SettingsRegistry,
    setting: Setting,
}

impl<'a> SettingBuilder<'a> {
    /// Accepted value syntax shown in the detail block
    pub fn valid_values(mut self, values: impl Into<String>) -> Self {
        self.setting.valid_values = Some(values.into());
        self
    }

    /// Default value shown in the detail block
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.setting.default_value = Some(value.into());
        self
    }

    /// Mark deprecated with a replacement message
    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.setting.deprecated = Some(message.into());
        self
    }

    /// Exclude from public documentation
    pub fn internal(mut self) -> Self {
        self.setting.internal = true;
        self
    }

    /// Register the finished setting
    pub fn register(self) {
        log::debug!("registered setting {}", self.setting.name);
        self.registry.settings.push(self.setting);
    }
}

/// Registry of all documentable settings known to one generation session
#[derive(Debug, Default)]
pub struct SettingsRegistry {
    settings: Vec<Setting>,
}

impl SettingsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Start registering one setting
    pub fn setting(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> SettingBuilder<'_> {
        SettingBuilder {
            setting: Setting {
                name: name.into(),
                description: description.into(),
                valid_values: None,
                default_value: None,
                deprecated: None,
                internal: false,
            },
            registry: self,
        }
    }

    /// All public settings, in registration order
    pub fn public_settings(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter().filter(|s| !s.internal)
    }

    /// All deprecated public settings, in registration order
    pub fn deprecated_settings(&self) -> impl Iterator<Item = &Setting> {
        self.public_settings().filter(|s| s.deprecated.is_some())
    }

    /// Number of registered settings, internal ones included
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether no settings have been registered
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SettingsRegistry {
        let mut registry = SettingsRegistry::new();
        registry
            .setting("db.checkpoint.interval.time", "Time between checkpoint runs.")
            .valid_values("a duration (`10m`, `2h`)")
            .default_value("15m")
            .register();
        registry
            .setting("db.tx_log.rotation_threshold", "Old name for log rotation size.")
            .deprecated("Replaced by `db.tx_log.rotation.size`.")
            .register();
        registry
            .setting("unsupported.db.inspect", "Diagnostics hook.")
            .internal()
            .register();
        registry
    }

    #[test]
    fn internal_settings_excluded_from_public_view() {
        let registry = sample();
        assert_eq!(registry.len(), 3);
        let names: Vec<_> = registry.public_settings().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["db.checkpoint.interval.time", "db.tx_log.rotation_threshold"]
        );
    }

    #[test]
    fn deprecated_view_is_subset() {
        let registry = sample();
        let names: Vec<_> = registry
            .deprecated_settings()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["db.tx_log.rotation_threshold"]);
    }

    #[test]
    fn record_carries_attributes_in_declaration_order() {
        let registry = sample();
        let record = registry.public_settings().next().unwrap().to_record();
        assert_eq!(record.id, "config_db.checkpoint.interval.time");
        let keys: Vec<_> = record.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["Valid values", "Default value"]);
    }
}
