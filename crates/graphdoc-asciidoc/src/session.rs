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

//! Literate doc-test sessions
//!
//! A [`DocSession`] owns everything one documentation test produces: the
//! snippet map filled in while the test drives the database, the numbered
//! console/query output files, and finally the rendered document itself. One
//! session per document; sessions share nothing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use graphdoc_core::{Result, anchor_id};

use crate::materialize::Materializer;
use crate::snippet::{SnippetMap, substitute};

/// One documentation-generation session for a single document
#[derive(Debug)]
pub struct DocSession {
    base_dir: PathBuf,
    title: String,
    doc_name: String,
    snippets: SnippetMap,
    materializer: Materializer,
    issued_anchors: BTreeSet<String>,
}

impl DocSession {
    /// Create a session writing under `<base_dir>/<section>/`
    ///
    /// The document filename and anchor derive from `title` via
    /// [`anchor_id`].
    pub fn new(base_dir: impl Into<PathBuf>, section: &str, title: impl Into<String>) -> Self {
        let title = title.into();
        let doc_name = anchor_id(&title);
        Self {
            base_dir: base_dir.into().join(section),
            title,
            doc_name,
            snippets: SnippetMap::new(),
            materializer: Materializer::new(),
            issued_anchors: BTreeSet::new(),
        }
    }

    /// Document name derived from the title
    pub fn doc_name(&self) -> &str {
        &self.doc_name
    }

    /// Directory the document and its includes land in
    pub fn section_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Add or replace a named snippet
    pub fn add_snippet(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.snippets.insert(name.into(), content.into());
    }

    /// Write a numbered same-typed snippet into the includes directory
    ///
    /// Returns the `include::` reference for embedding. Numbering is scoped
    /// to this session; see [`Materializer::write_numbered_by_type`].
    pub fn write_numbered(&mut self, type_tag: &str, content: &str) -> Result<String> {
        let includes_dir = self.base_dir.join("includes");
        self.materializer
            .write_numbered_by_type(&includes_dir, type_tag, content)
    }

    /// An anchor id unique within this session
    ///
    /// The pure [`anchor_id`] does not detect collisions; this opt-in helper
    /// suffixes `-2`, `-3`, ... when the same derived id is requested again.
    pub fn unique_anchor(&mut self, name: &str) -> String {
        let base = anchor_id(name);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.issued_anchors.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
        self.issued_anchors.insert(candidate.clone());
        candidate
    }

    /// Substitute placeholders in `body` and write the finished document
    ///
    /// The document gets a `[[<doc-name>]]` anchor and a title heading, then
    /// the substituted body. Returns the path of the written document.
    pub fn render(&mut self, body: &str) -> Result<PathBuf> {
        let substituted = substitute(
            body,
            &self.doc_name,
            &self.snippets,
            &self.base_dir,
            &mut self.materializer,
        )?;

        let mut doc = String::new();
        doc.push_str(&format!("[[{}]]\n", self.doc_name));
        doc.push_str(&format!("= {} =\n\n", self.title));
        doc.push_str(&substituted);
        if !doc.ends_with('\n') {
            doc.push('\n');
        }

        let filename = format!("{}.asciidoc", self.doc_name);
        self.materializer.write(&self.base_dir, &filename, &doc)
    }
}
