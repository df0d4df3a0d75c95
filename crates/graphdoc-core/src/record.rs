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

//! The uniform record shape produced by every metadata source adapter
//!
//! Settings, management beans, metrics and query functions all reduce to the
//! same `(id, name, description, attributes)` form before rendering. Records
//! are immutable once constructed and discarded after the table is emitted.

use serde::{Deserialize, Serialize};

/// One key/value attribute of a documentable record
///
/// `flags` carries renderer-specific markers (for example `deprecated` or
/// `read-only`) that a formatter may surface next to the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute key, unique within one record
    pub key: String,
    /// Attribute value, rendered verbatim into a table cell
    pub value: String,
    /// Renderer-specific markers, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
}

impl Attribute {
    /// Create an attribute without flags
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            flags: Vec::new(),
        }
    }

    /// Add a marker flag
    pub fn flagged(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }
}

/// A single documentable item yielded by a metadata source adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentableRecord {
    /// Stable identifier, used to derive cross-reference anchors
    pub id: String,
    /// Human-readable name, used for sorting and table cells
    pub name: String,
    /// One-paragraph description; may contain newlines (flattened at render)
    pub description: String,
    /// Ordered attributes, rendered in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

impl DocumentableRecord {
    /// Create a record whose id equals its name
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    /// Override the record id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Append an attribute
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}
