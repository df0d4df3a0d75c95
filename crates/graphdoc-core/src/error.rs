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

//! Error types for documentation generation
//!
//! This module defines the error taxonomy shared by all graphdoc crates:
//! metadata-source failures, filesystem failures, and malformed-table
//! programming errors. A missing snippet is deliberately NOT an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for graphdoc operations
pub type Result<T> = std::result::Result<T, GraphdocError>;

/// Comprehensive error type for documentation generation
#[derive(Error, Debug)]
pub enum GraphdocError {
    /// A table row was appended with the wrong number of cells
    #[error("table row {row} has {found} cells, header has {expected}")]
    CellCountMismatch {
        /// Index of the offending row (0-based, in append order)
        row: usize,
        /// Number of cells the header defines
        expected: usize,
        /// Number of cells the row actually carried
        found: usize,
    },

    /// A management bean was looked up by exact name and does not exist
    #[error("no management bean named '{name}'")]
    BeanNotFound {
        /// The requested bean name
        name: String,
    },

    /// A bean query pattern could not be compiled
    #[error("invalid bean query pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Human-readable reason from the pattern compiler
        message: String,
    },

    /// A metadata source failed to produce its records
    #[error("metadata source error: {message}")]
    MetadataSource {
        /// Human-readable failure description
        message: String,
    },

    /// A filesystem operation failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation was targeting
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GraphdocError {
    /// Wrap an I/O error with the path it occurred at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a metadata-source error from any displayable cause
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::MetadataSource {
            message: message.into(),
        }
    }
}
