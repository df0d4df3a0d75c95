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

//! AsciiDoc table assembly and rendering
//!
//! A [`Table`] is built incrementally and rendered once. Every row must carry
//! exactly as many cells as the header; a mismatch is a programming error and
//! fails loudly at append time rather than padding or truncating silently.
//!
//! Newlines inside a cell are flattened to a single space so a multi-line
//! description cannot break the row. The `|` cell separator is NOT escaped by
//! default (a long-standing limitation of the generated docs, preserved for
//! byte-compatible output); [`Table::escape_cells`] opts in to escaping.

use crate::error::{GraphdocError, Result};
use crate::record::DocumentableRecord;

/// Sort order applied to rows before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive lexicographic order on the first cell
    #[default]
    NameCaseInsensitive,
    /// Lexicographic order on the concatenation of all cells
    Signature,
    /// Keep rows in append order
    None,
}

/// An AsciiDoc table under construction
#[derive(Debug, Clone)]
pub struct Table {
    column_spec: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    escape_cells: bool,
}

impl Table {
    /// Create an empty table with the given column spec and header cells
    ///
    /// The column spec is a renderer layout string (widths and alignment,
    /// for example `"<45,>20m,<35"`) passed through verbatim.
    pub fn new<S: Into<String>>(column_spec: impl Into<String>, header: Vec<S>) -> Self {
        Self {
            column_spec: column_spec.into(),
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            escape_cells: false,
        }
    }

    /// Opt in to escaping `|` inside cells as `\|`
    pub fn escape_cells(mut self, escape: bool) -> Self {
        self.escape_cells = escape;
        self
    }

    /// Append a row
    ///
    /// Fails if the cell count differs from the header cell count.
    pub fn push_row<S: Into<String>>(&mut self, cells: Vec<S>) -> Result<()> {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.header.len() {
            return Err(GraphdocError::CellCountMismatch {
                row: self.rows.len(),
                expected: self.header.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Number of data rows appended so far
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table as an AsciiDoc block
    ///
    /// Rows are ordered by `sort` using a stable sort, so rendering the same
    /// input twice yields byte-identical output.
    pub fn render(&self, sort: SortKey) -> String {
        let mut rows = self.rows.clone();
        match sort {
            SortKey::NameCaseInsensitive => {
                rows.sort_by_key(|row| row.first().map(|c| c.to_lowercase()).unwrap_or_default());
            }
            SortKey::Signature => rows.sort_by_key(|row| row.join("|")),
            SortKey::None => {}
        }

        let mut out = String::new();
        out.push_str(&format!("[options=\"header\", cols=\"{}\"]\n", self.column_spec));
        out.push_str("|===\n");
        out.push_str(&self.render_cells(&self.header));
        for row in &rows {
            out.push_str(&self.render_cells(row));
        }
        out.push_str("|===\n");
        out
    }

    fn render_cells(&self, cells: &[String]) -> String {
        let mut line = String::new();
        for cell in cells {
            line.push('|');
            line.push_str(&sanitize(cell, self.escape_cells));
        }
        line.push('\n');
        line
    }
}

/// Render a record sequence as a two-column name/description table
///
/// The convenience shape used by most generators: one row per record, sorted
/// case-insensitively by name. An empty sequence produces a header-only table.
pub fn render_records<S: Into<String>>(
    records: &[DocumentableRecord],
    column_spec: impl Into<String>,
    header: Vec<S>,
) -> Result<String> {
    let mut table = Table::new(column_spec, header);
    for record in records {
        table.push_row(vec![record.name.clone(), record.description.clone()])?;
    }
    Ok(table.render(SortKey::NameCaseInsensitive))
}

/// Flatten newlines to single spaces, optionally escaping `|`
fn sanitize(cell: &str, escape: bool) -> String {
    let flat = cell.replace("\r\n", " ").replace(['\n', '\r'], " ");
    if escape { flat.replace('|', "\\|") } else { flat }
}
