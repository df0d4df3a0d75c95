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

//! Cross-reference anchor id derivation
//!
//! Anchor ids link table-of-contents entries to detail sections. The
//! transforms here are pure: the same name always yields the same id, and the
//! result never contains a space or `/`. Collisions between distinct names in
//! one document are not detected here; sessions that need uniqueness go
//! through the doc session's `unique_anchor` helper, and numbered snippet
//! files get their counters from the materializer.

/// Derive a documentation anchor id from a human-readable name
///
/// Lower-cases the name and maps space and `/` to `-`. All other characters
/// pass through unchanged.
pub fn anchor_id(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' => '-',
            other => other,
        })
        .collect()
}

/// Derive an anchor id from a management-bean name
///
/// Bean names carry attribute types with generic brackets and commas
/// (`List<Map<String, Object>>`), none of which are valid inside an anchor.
/// Applies the base transform of [`anchor_id`] and then drops every character
/// outside `[a-z0-9._-]`.
pub fn bean_anchor_id(name: &str) -> String {
    anchor_id(name)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes() {
        assert_eq!(anchor_id("Page cache"), "page-cache");
        assert_eq!(anchor_id("High Availability/Cluster"), "high-availability-cluster");
    }

    #[test]
    fn same_input_same_output() {
        let names = ["Kernel", "Store file sizes", "dbms/functions", "α β"];
        for name in names {
            assert_eq!(anchor_id(name), anchor_id(name));
            assert_eq!(bean_anchor_id(name), bean_anchor_id(name));
        }
    }

    #[test]
    fn never_contains_space_or_slash() {
        let names = ["a b/c d", " leading", "trailing ", "//", "Mixed Case/Path Name"];
        for name in names {
            let id = anchor_id(name);
            assert!(!id.contains(' '), "space in {id:?}");
            assert!(!id.contains('/'), "slash in {id:?}");
        }
    }

    #[test]
    fn bean_ids_strip_generic_brackets() {
        assert_eq!(
            bean_anchor_id("Diagnostics List<Map<String, Object>>"),
            "diagnostics-listmapstring-object"
        );
    }

    #[test]
    fn bean_ids_keep_dots_and_underscores() {
        assert_eq!(bean_anchor_id("org.graphtide/Page_cache"), "org.graphtide-page_cache");
    }
}
