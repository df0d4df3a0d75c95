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

//! Core types for the graphdoc toolchain
//!
//! Everything downstream of a metadata source reduces to the same small
//! vocabulary: a [`record::DocumentableRecord`] to describe one documentable
//! item, a [`table::Table`] to lay records out as AsciiDoc, and
//! [`anchor::anchor_id`] to derive the cross-reference ids that tie summary
//! tables to detail sections.

pub mod anchor;
pub mod error;
pub mod record;
pub mod table;

pub use anchor::{anchor_id, bean_anchor_id};
pub use error::{GraphdocError, Result};
pub use record::{Attribute, DocumentableRecord};
pub use table::{SortKey, Table, render_records};
