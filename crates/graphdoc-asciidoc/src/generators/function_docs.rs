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

//! Query-function signature documentation

use graphdoc_core::{Result, SortKey, Table};
use graphdoc_registry::functions::FunctionSource;

/// Render the function reference table, ordered by signature
pub fn generate(source: &dyn FunctionSource) -> Result<String> {
    let mut out = String::new();
    out.push_str("[[function-signatures]]\n");
    out.push_str(".Functions\n");
    let mut table = Table::new("<15m,<45m,<40", vec!["Name", "Signature", "Description"]);
    for function in source.functions()? {
        table.push_row(vec![function.name, function.signature, function.description])?;
    }
    out.push_str(&table.render(SortKey::Signature));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdoc_registry::functions::{FunctionRecord, StaticFunctionSource};

    #[test]
    fn rows_ordered_by_signature() {
        let source = StaticFunctionSource::new(vec![
            FunctionRecord::new(
                "collect",
                "collect(input :: ANY) :: LIST OF ANY",
                "Aggregate values into a list.",
            ),
            FunctionRecord::new(
                "abs",
                "abs(input :: INTEGER) :: INTEGER",
                "Absolute value of an integer.",
            ),
            FunctionRecord::new(
                "abs",
                "abs(input :: FLOAT) :: FLOAT",
                "Absolute value of a float.",
            ),
        ]);
        let out = generate(&source).unwrap();
        let float_at = out.find("abs(input :: FLOAT)").unwrap();
        let int_at = out.find("abs(input :: INTEGER)").unwrap();
        let collect_at = out.find("collect(input :: ANY)").unwrap();
        assert!(float_at < int_at);
        assert!(int_at < collect_at);
    }

    #[test]
    fn empty_source_renders_header_only() {
        let source = StaticFunctionSource::new(Vec::new());
        let out = generate(&source).unwrap();
        assert!(out.contains("|===\n|Name|Signature|Description\n|===\n"));
    }
}
