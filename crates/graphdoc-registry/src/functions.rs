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

//! Query-function signature source
//!
//! In production the function list comes from the running database (the rows
//! of `CALL dbms.functions()`); offline generation and tests use
//! [`StaticFunctionSource`]. Either way the generator sees the same
//! [`FunctionSource`] seam.

use graphdoc_core::Result;
use serde::{Deserialize, Serialize};

/// One query-function signature row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function name, for example `abs`
    pub name: String,
    /// Full signature, for example `abs(input :: FLOAT) :: FLOAT`
    pub signature: String,
    /// One-line description
    pub description: String,
}

impl FunctionRecord {
    /// Create a function record
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            description: description.into(),
        }
    }
}

/// Capability seam over whatever yields the function list
pub trait FunctionSource {
    /// All documentable functions, in source order
    fn functions(&self) -> Result<Vec<FunctionRecord>>;
}

/// Function source backed by a fixed list
#[derive(Debug, Default)]
pub struct StaticFunctionSource {
    functions: Vec<FunctionRecord>,
}

impl StaticFunctionSource {
    /// Create a source over the given records
    pub fn new(functions: Vec<FunctionRecord>) -> Self {
        Self { functions }
    }
}

impl FunctionSource for StaticFunctionSource {
    fn functions(&self) -> Result<Vec<FunctionRecord>> {
        Ok(self.functions.clone())
    }
}
