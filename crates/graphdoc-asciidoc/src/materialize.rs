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

//! File materialization for generated documentation
//!
//! One [`Materializer`] lives for one generation session. It creates target
//! directories on demand and hands out collision-free numbered filenames for
//! same-typed snippets within the session. Counters are in-memory only; two
//! separate runs into the same directory can collide, which is accepted
//! behavior for a regenerate-everything toolchain.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use graphdoc_core::{GraphdocError, Result};

/// Session-scoped file writer with per-type snippet counters
#[derive(Debug, Default)]
pub struct Materializer {
    counters: HashMap<(PathBuf, String), u32>,
}

impl Materializer {
    /// Create a materializer for one generation session
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `content` to `directory/filename`, creating parent directories
    ///
    /// The file handle is flushed and closed on every exit path. Filesystem
    /// failures propagate with the offending path attached; there is no
    /// retry and no cleanup of files written earlier in the session.
    pub fn write(&self, directory: &Path, filename: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(directory).map_err(|e| GraphdocError::io(directory, e))?;
        let path = directory.join(filename);
        fs::write(&path, content).map_err(|e| GraphdocError::io(&path, e))?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }

    /// Write a numbered snippet file and return its `include::` reference
    ///
    /// The first call for a `(directory, type_tag)` pair writes `<tag>-1.asciidoc`,
    /// the next `<tag>-2.asciidoc`, and so on for the lifetime of this
    /// materializer. The returned reference carries the final segment of
    /// `directory`, so it resolves from a document written next to that
    /// directory (the session layout: document in `<section>/`, snippets in
    /// `<section>/includes/`).
    pub fn write_numbered_by_type(
        &mut self,
        directory: &Path,
        type_tag: &str,
        content: &str,
    ) -> Result<String> {
        let counter = self
            .counters
            .entry((directory.to_path_buf(), type_tag.to_string()))
            .or_insert(0);
        *counter += 1;
        let filename = format!("{}-{}.asciidoc", type_tag, counter);
        self.write(directory, &filename, content)?;
        let reference = match directory.file_name().and_then(|n| n.to_str()) {
            Some(dir_name) => format!("include::{}/{}[]\n", dir_name, filename),
            None => format!("include::{}[]\n", filename),
        };
        Ok(reference)
    }
}
