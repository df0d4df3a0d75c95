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

//! Management-bean registry
//!
//! A [`BeanRegistry`] is the capability seam over whatever management
//! subsystem the product exposes: a live endpoint in production, an
//! [`InMemoryBeanRegistry`] in tests and offline generation. Queries address
//! beans by glob-style name pattern; results are sorted case-insensitively by
//! name so generated documentation is stable across runs.

use glob::Pattern;
use graphdoc_core::{Attribute, DocumentableRecord, GraphdocError, Result, bean_anchor_id};
use serde::{Deserialize, Serialize};

/// One named attribute exposed by a management bean
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanAttribute {
    /// Attribute name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Attribute type as the management layer reports it (may contain
    /// generic brackets)
    pub attribute_type: String,
    /// Whether the attribute can be read
    pub readable: bool,
    /// Whether the attribute can be written
    pub writable: bool,
}

impl BeanAttribute {
    /// Create a read-only attribute
    pub fn read_only(
        name: impl Into<String>,
        description: impl Into<String>,
        attribute_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attribute_type: attribute_type.into(),
            readable: true,
            writable: false,
        }
    }

    /// Mark the attribute writable
    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }
}

/// A management bean: name, description and its attribute set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanDescriptor {
    /// Bean name as registered with the management subsystem
    pub name: String,
    /// One-paragraph description
    pub description: String,
    /// Attributes in declaration order
    pub attributes: Vec<BeanAttribute>,
}

impl BeanDescriptor {
    /// Create a bean with no attributes
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, attribute: BeanAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Anchor id for the bean's detail section
    pub fn anchor(&self) -> String {
        format!("jmx-{}", bean_anchor_id(&self.name))
    }

    /// Reduce to the uniform record shape
    pub fn to_record(&self) -> DocumentableRecord {
        let mut record =
            DocumentableRecord::new(&self.name, &self.description).with_id(self.anchor());
        for attribute in &self.attributes {
            let mut attr = Attribute::new(&attribute.name, &attribute.description);
            if !attribute.writable {
                attr = attr.flagged("read-only");
            }
            record = record.with_attribute(attr);
        }
        record
    }
}

/// Capability seam over a name-pattern-addressable management registry
pub trait BeanRegistry {
    /// All beans whose name matches the glob-style pattern
    ///
    /// Returns an empty sequence when nothing matches; an invalid pattern is
    /// an error. Results are sorted case-insensitively by name.
    fn query(&self, pattern: &str) -> Result<Vec<BeanDescriptor>>;

    /// The single bean with exactly this name
    ///
    /// Unlike [`BeanRegistry::query`], a miss here is an error: generators
    /// that name a bean explicitly expect it to exist.
    fn find(&self, name: &str) -> Result<BeanDescriptor> {
        self.query(name)?
            .into_iter()
            .find(|bean| bean.name == name)
            .ok_or_else(|| GraphdocError::BeanNotFound {
                name: name.to_string(),
            })
    }
}

/// Bean registry backed by a plain in-memory list
#[derive(Debug, Default)]
pub struct InMemoryBeanRegistry {
    beans: Vec<BeanDescriptor>,
}

impl InMemoryBeanRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bean
    pub fn register(&mut self, bean: BeanDescriptor) {
        log::debug!("registered bean {}", bean.name);
        self.beans.push(bean);
    }
}

impl BeanRegistry for InMemoryBeanRegistry {
    fn query(&self, pattern: &str) -> Result<Vec<BeanDescriptor>> {
        let compiled = Pattern::new(pattern).map_err(|e| GraphdocError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        let mut matched: Vec<BeanDescriptor> = self
            .beans
            .iter()
            .filter(|bean| compiled.matches(&bean.name))
            .cloned()
            .collect();
        matched.sort_by_key(|bean| bean.name.to_lowercase());
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryBeanRegistry {
        let mut registry = InMemoryBeanRegistry::new();
        registry.register(
            BeanDescriptor::new("Page cache", "Page cache statistics.").with_attribute(
                BeanAttribute::read_only("Faults", "Page faults since start.", "long"),
            ),
        );
        registry.register(BeanDescriptor::new("Kernel", "Kernel information."));
        registry.register(BeanDescriptor::new(
            "Primitive count",
            "Node, relationship and property counts.",
        ));
        registry
    }

    #[test]
    fn query_matches_and_sorts() {
        let registry = sample();
        let beans = registry.query("P*").unwrap();
        let names: Vec<_> = beans.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Page cache", "Primitive count"]);
    }

    #[test]
    fn query_miss_is_empty_not_error() {
        let registry = sample();
        assert!(registry.query("Nonexistent*").unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_is_error() {
        let registry = sample();
        let err = registry.query("[").unwrap_err();
        assert!(matches!(err, GraphdocError::InvalidPattern { .. }));
    }

    #[test]
    fn find_miss_is_error() {
        let registry = sample();
        let err = registry.find("Locking").unwrap_err();
        assert!(matches!(err, GraphdocError::BeanNotFound { name } if name == "Locking"));
    }

    #[test]
    fn record_flags_read_only_attributes() {
        let registry = sample();
        let record = registry.find("Page cache").unwrap().to_record();
        assert_eq!(record.id, "jmx-page-cache");
        assert_eq!(record.attributes[0].flags, ["read-only"]);
    }
}
