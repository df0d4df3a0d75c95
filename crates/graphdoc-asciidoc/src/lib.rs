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

//! AsciiDoc rendering for graphdoc
//!
//! The pipeline: a metadata source adapter (from `graphdoc-registry`) yields
//! records, a generator from [`generators`] lays them out as AsciiDoc, and a
//! [`materialize::Materializer`] puts the result on disk. Literate doc tests
//! drive the same machinery through a [`session::DocSession`], filling a
//! snippet map whose `@@name` placeholders are resolved by [`snippet`].

pub mod generators;
pub mod materialize;
pub mod session;
pub mod snippet;

pub use materialize::Materializer;
pub use session::DocSession;
pub use snippet::{SnippetMap, substitute};
