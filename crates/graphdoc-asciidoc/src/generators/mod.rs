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

//! Concrete documentation generators
//!
//! One generator per metadata source. Each takes its source, walks the
//! records once, and returns the rendered AsciiDoc section as a string; the
//! caller decides whether it goes to a file or stdout.

pub mod bean_docs;
pub mod config_docs;
pub mod function_docs;
pub mod metrics_docs;
