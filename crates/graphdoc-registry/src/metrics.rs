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

//! Documented-metrics registry
//!
//! Metrics are grouped into named sections (one section per subsystem).
//! Sections keep registration order; the generator sorts metric rows within a
//! section at render time.

use graphdoc_core::DocumentableRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One documented metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name as published, for example `db.transaction.active`
    pub name: String,
    /// One-line description
    pub description: String,
}

impl Metric {
    /// Reduce to the uniform record shape
    pub fn to_record(&self) -> DocumentableRecord {
        DocumentableRecord::new(&self.name, &self.description)
    }
}

/// Registry of documented metrics, grouped by section
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    sections: IndexMap<String, Vec<Metric>>,
}

impl MetricsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one metric under a section
    pub fn document(
        &mut self,
        section: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.sections.entry(section.into()).or_default().push(Metric {
            name: name.into(),
            description: description.into(),
        });
    }

    /// Sections in registration order, each with its metrics
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[Metric])> {
        self.sections
            .iter()
            .map(|(name, metrics)| (name.as_str(), metrics.as_slice()))
    }

    /// Metrics of one section, if the section exists
    pub fn section(&self, name: &str) -> Option<&[Metric]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    /// Total number of registered metrics across all sections
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Whether no metrics have been registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_registration_order() {
        let mut registry = MetricsRegistry::new();
        registry.document("transaction", "db.transaction.active", "Active transactions.");
        registry.document("page cache", "db.pagecache.hits", "Page cache hits.");
        registry.document("transaction", "db.transaction.committed", "Committed transactions.");

        let names: Vec<_> = registry.sections().map(|(name, _)| name).collect();
        assert_eq!(names, ["transaction", "page cache"]);
        assert_eq!(registry.section("transaction").unwrap().len(), 2);
        assert_eq!(registry.len(), 3);
    }
}
