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

//! Management-bean documentation
//!
//! Each bean section is emitted twice, once inside
//! `ifdef::nonhtmloutput[]` and once inside `ifndef::nonhtmloutput[]`, with
//! near-duplicate content. The duplication is deliberate: the published
//! toolchain has always rendered the two modes from separate blocks, and
//! downstream includes rely on the exact block structure.

use graphdoc_core::{Result, SortKey, Table};
use graphdoc_registry::beans::{BeanDescriptor, BeanRegistry};

const ATTRIBUTE_COLS: &str = "<20m,<36,<20m,<7";

/// Render documentation for every bean matching `pattern`
///
/// Produces a summary table cross-referencing each bean's detail section,
/// then one detail section per bean in the registry's (sorted) query order.
pub fn generate(registry: &dyn BeanRegistry, pattern: &str) -> Result<String> {
    let beans = registry.query(pattern)?;

    let mut out = String::new();
    out.push_str("[[jmx-beans]]\n");
    out.push_str("= Management beans =\n\n");

    let mut summary = Table::new("<30m,<70", vec!["Name", "Description"]);
    for bean in &beans {
        let record = bean.to_record();
        summary.push_row(vec![
            format!("<<{},{}>>", record.id, record.name),
            record.description,
        ])?;
    }
    out.push_str(&summary.render(SortKey::NameCaseInsensitive));
    out.push('\n');

    for bean in &beans {
        out.push_str(&bean_section(bean)?);
        out.push('\n');
    }
    Ok(out)
}

/// Render the detail section for exactly one bean, found by name
///
/// A name that matches no registered bean is a metadata-source error.
pub fn generate_one(registry: &dyn BeanRegistry, name: &str) -> Result<String> {
    let bean = registry.find(name)?;
    bean_section(&bean)
}

fn bean_section(bean: &BeanDescriptor) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("[[{}]]\n", bean.anchor()));
    out.push_str(&format!("== {} ==\n\n", bean.name));
    out.push_str(&format!("{}\n\n", bean.description));

    let table = attribute_table(bean)?;

    out.push_str("ifdef::nonhtmloutput[]\n");
    out.push_str(&table);
    out.push_str("endif::nonhtmloutput[]\n\n");

    out.push_str("ifndef::nonhtmloutput[]\n");
    out.push_str(&format!(".Attributes of {}\n", bean.name));
    out.push_str(&table);
    out.push_str("endif::nonhtmloutput[]\n");
    Ok(out)
}

fn attribute_table(bean: &BeanDescriptor) -> Result<String> {
    let mut table = Table::new(
        ATTRIBUTE_COLS,
        vec!["Name", "Description", "Type", "Read only"],
    );
    for attribute in &bean.attributes {
        table.push_row(vec![
            attribute.name.clone(),
            attribute.description.clone(),
            attribute.attribute_type.clone(),
            if attribute.writable { "no" } else { "yes" }.to_string(),
        ])?;
    }
    Ok(table.render(SortKey::NameCaseInsensitive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdoc_registry::beans::{BeanAttribute, InMemoryBeanRegistry};

    fn sample() -> InMemoryBeanRegistry {
        let mut registry = InMemoryBeanRegistry::new();
        registry.register(
            BeanDescriptor::new("Page cache", "Page cache statistics.")
                .with_attribute(BeanAttribute::read_only(
                    "Faults",
                    "Page faults since start.",
                    "long",
                ))
                .with_attribute(
                    BeanAttribute::read_only("EvictionTarget", "Eviction goal.", "long").writable(),
                ),
        );
        registry.register(BeanDescriptor::new(
            "Kernel",
            "Information about the database kernel.",
        ));
        registry
    }

    #[test]
    fn emits_both_render_mode_branches_per_bean() {
        let out = generate(&sample(), "*").unwrap();
        // one pair per bean
        assert_eq!(out.matches("ifdef::nonhtmloutput[]").count(), 2);
        assert_eq!(out.matches("ifndef::nonhtmloutput[]").count(), 2);
        assert_eq!(out.matches("endif::nonhtmloutput[]").count(), 4);
    }

    #[test]
    fn branches_are_near_duplicates() {
        let out = generate(&sample(), "Page*").unwrap();
        assert_eq!(out.matches("|Faults|Page faults since start.|long|yes").count(), 2);
        assert_eq!(out.matches(".Attributes of Page cache").count(), 1);
    }

    #[test]
    fn summary_cross_references_detail_sections() {
        let out = generate(&sample(), "*").unwrap();
        assert!(out.contains("|<<jmx-kernel,Kernel>>|Information about the database kernel."));
        assert!(out.contains("[[jmx-kernel]]"));
    }

    #[test]
    fn writable_attributes_marked_in_table() {
        let out = generate(&sample(), "Page*").unwrap();
        assert!(out.contains("|EvictionTarget|Eviction goal.|long|no"));
    }

    #[test]
    fn empty_match_yields_header_only_summary() {
        let out = generate(&sample(), "Missing*").unwrap();
        assert!(out.contains("|===\n|Name|Description\n|===\n"));
    }

    #[test]
    fn single_bean_by_exact_name() {
        let out = generate_one(&sample(), "Kernel").unwrap();
        assert!(out.contains("[[jmx-kernel]]"));
        assert!(!out.contains("Page cache"));
    }

    #[test]
    fn single_bean_miss_is_error() {
        let err = generate_one(&sample(), "Locking").unwrap_err();
        assert!(matches!(
            err,
            graphdoc_core::GraphdocError::BeanNotFound { name } if name == "Locking"
        ));
    }
}
