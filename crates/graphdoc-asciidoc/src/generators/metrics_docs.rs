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

//! Published-metrics documentation

use graphdoc_core::{DocumentableRecord, GraphdocError, Result, anchor_id, render_records};
use graphdoc_registry::metrics::{Metric, MetricsRegistry};

/// Render one metrics table per section
///
/// With an empty `sections` filter every registered section is rendered, in
/// registration order. Naming a section that does not exist is a
/// metadata-source error.
pub fn generate(registry: &MetricsRegistry, sections: &[String]) -> Result<String> {
    let mut out = String::new();
    if sections.is_empty() {
        for (name, metrics) in registry.sections() {
            out.push_str(&section_table(name, metrics)?);
            out.push('\n');
        }
    } else {
        for name in sections {
            let metrics = registry.section(name).ok_or_else(|| {
                GraphdocError::metadata(format!("no metrics section named '{}'", name))
            })?;
            out.push_str(&section_table(name, metrics)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn section_table(section: &str, metrics: &[Metric]) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("[[metrics-{}]]\n", anchor_id(section)));
    out.push_str(&format!(".{} metrics\n", section));
    let records: Vec<DocumentableRecord> = metrics.iter().map(Metric::to_record).collect();
    out.push_str(&render_records(&records, "<1m,<4", vec!["Name", "Description"])?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsRegistry {
        let mut registry = MetricsRegistry::new();
        registry.document("transaction", "db.transaction.committed", "Committed transactions.");
        registry.document("transaction", "db.transaction.active", "Active transactions.");
        registry.document("page cache", "db.pagecache.hits", "Page cache hits.");
        registry
    }

    #[test]
    fn renders_all_sections_by_default() {
        let out = generate(&sample(), &[]).unwrap();
        assert!(out.contains("[[metrics-transaction]]"));
        assert!(out.contains("[[metrics-page-cache]]"));
        assert!(out.contains(".page cache metrics"));
    }

    #[test]
    fn rows_sorted_within_section() {
        let out = generate(&sample(), &["transaction".to_string()]).unwrap();
        let active = out.find("db.transaction.active").unwrap();
        let committed = out.find("db.transaction.committed").unwrap();
        assert!(active < committed);
        assert!(!out.contains("pagecache"));
    }

    #[test]
    fn unknown_section_is_metadata_error() {
        let err = generate(&sample(), &["bolt".to_string()]).unwrap_err();
        assert!(matches!(err, GraphdocError::MetadataSource { .. }));
    }
}
