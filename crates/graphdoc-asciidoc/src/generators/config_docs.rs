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

//! Configuration-settings documentation

use graphdoc_core::{DocumentableRecord, Result, SortKey, Table};
use graphdoc_registry::settings::{Setting, SettingsRegistry};

/// Render the settings reference: summary table, detail blocks, deprecations
///
/// Internal settings are skipped. The summary cross-references each detail
/// block through the setting's `config_` anchor. Deprecated settings appear
/// both in the main tables and in a trailing deprecations table.
pub fn generate(registry: &SettingsRegistry) -> Result<String> {
    let mut settings: Vec<&Setting> = registry.public_settings().collect();
    settings.sort_by_key(|s| s.name.to_lowercase());

    let mut out = String::new();
    out.push_str("[[config-settings]]\n");
    out.push_str("= Configuration settings =\n\n");

    let mut summary = Table::new("<40,<60", vec!["Name", "Description"]);
    for setting in &settings {
        let record = setting.to_record();
        summary.push_row(vec![
            format!("<<{},{}>>", record.id, record.name),
            record.description,
        ])?;
    }
    out.push_str(&summary.render(SortKey::NameCaseInsensitive));
    out.push('\n');

    for setting in &settings {
        out.push_str(&detail_block(&setting.to_record()));
        out.push('\n');
    }

    let deprecated: Vec<&Setting> = registry.deprecated_settings().collect();
    if !deprecated.is_empty() {
        out.push_str("[[config-deprecated-settings]]\n");
        out.push_str("== Deprecated settings ==\n\n");
        let mut table = Table::new("<40,<60", vec!["Name", "Replaced by"]);
        for setting in deprecated {
            let message = setting.deprecated.clone().unwrap_or_default();
            table.push_row(vec![
                format!("<<{},{}>>", setting.anchor(), setting.name),
                message,
            ])?;
        }
        out.push_str(&table.render(SortKey::NameCaseInsensitive));
    }

    Ok(out)
}

fn detail_block(record: &DocumentableRecord) -> String {
    let mut block = String::new();
    block.push_str(&format!("[[{}]]\n", record.id));
    block.push_str(&format!(".{}\n", record.name));
    block.push_str("[cols=\"<1h,<4\"]\n");
    block.push_str("|===\n");
    block.push_str(&format!("|Description|{}\n", flatten(&record.description)));
    for attribute in &record.attributes {
        block.push_str(&format!("|{}|{}\n", attribute.key, flatten(&attribute.value)));
    }
    block.push_str("|===\n");
    block
}

fn flatten(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
