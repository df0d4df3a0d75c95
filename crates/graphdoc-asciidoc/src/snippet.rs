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

//! `@@name` placeholder substitution
//!
//! A single pass over the document body replaces each resolved placeholder
//! with an `include::` directive and materializes the snippet content under
//! the session's `includes/` directory. An unresolved placeholder vanishes
//! silently: documentation tests pin this tolerance, so a typo'd name drops
//! out of the document instead of failing the build (a debug log line is the
//! only trace).

use std::path::Path;

use graphdoc_core::Result;
use indexmap::IndexMap;

use crate::materialize::Materializer;

/// Named snippet contents for one documentation session
pub type SnippetMap = IndexMap<String, String>;

#[derive(Debug, PartialEq)]
enum State {
    Scanning,
    MatchingPlaceholder,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Substitute every `@@name` placeholder in `body`
///
/// Resolved placeholders become `include::includes/<doc_name>-<name>.asciidoc[]`
/// and the snippet content is written to that path under `base_dir`. A
/// placeholder whose name is not in `snippets` is dropped. A lone `@@` not
/// followed by an identifier character is literal text. End of input while a
/// name is still being consumed resolves the partial name as captured.
pub fn substitute(
    body: &str,
    doc_name: &str,
    snippets: &SnippetMap,
    base_dir: &Path,
    materializer: &mut Materializer,
) -> Result<String> {
    let includes_dir = base_dir.join("includes");
    let mut out = String::with_capacity(body.len());
    let mut name = String::new();
    let mut state = State::Scanning;

    let mut chars = body.chars().peekable();
    loop {
        match state {
            State::Scanning => {
                let Some(c) = chars.next() else { break };
                if c == '@' && chars.peek() == Some(&'@') {
                    // look past the second '@' for an identifier start
                    let mut ahead = chars.clone();
                    ahead.next();
                    if ahead.peek().is_some_and(|&next| is_identifier_char(next)) {
                        chars.next();
                        name.clear();
                        state = State::MatchingPlaceholder;
                        continue;
                    }
                }
                out.push(c);
            }
            State::MatchingPlaceholder => match chars.peek() {
                Some(&c) if is_identifier_char(c) => {
                    name.push(c);
                    chars.next();
                }
                // the terminator is left unconsumed and re-scanned, so a
                // placeholder may directly follow another
                _ => {
                    resolve(&name, doc_name, snippets, &includes_dir, materializer, &mut out)?;
                    state = State::Scanning;
                }
            },
        }
    }
    Ok(out)
}

fn resolve(
    name: &str,
    doc_name: &str,
    snippets: &SnippetMap,
    includes_dir: &Path,
    materializer: &mut Materializer,
    out: &mut String,
) -> Result<()> {
    match snippets.get(name) {
        Some(content) => {
            let filename = format!("{}-{}.asciidoc", doc_name, name);
            materializer.write(includes_dir, &filename, content)?;
            out.push_str(&format!("include::includes/{}[]", filename));
        }
        None => {
            log::debug!("no snippet named '{}' for document '{}'", name, doc_name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn map(entries: &[(&str, &str)]) -> SnippetMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolved_placeholder_becomes_include_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("snippet1", "value")]);

        let out = substitute(
            "Title.\n@@snippet1\n",
            "title",
            &snippets,
            dir.path(),
            &mut materializer,
        )
        .unwrap();

        assert_eq!(out, "Title.\ninclude::includes/title-snippet1.asciidoc[]\n");
        let written = dir.path().join("includes").join("title-snippet1.asciidoc");
        assert_eq!(fs::read_to_string(written).unwrap(), "value");
    }

    #[test]
    fn each_distinct_placeholder_yields_one_include_and_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("query", "MATCH (n) RETURN n"), ("result", "3 rows")]);

        let out = substitute(
            "Query:\n@@query\nResult:\n@@result\n",
            "match-all",
            &snippets,
            dir.path(),
            &mut materializer,
        )
        .unwrap();

        assert_eq!(out.matches("include::").count(), 2);
        let includes = dir.path().join("includes");
        assert!(includes.join("match-all-query.asciidoc").exists());
        assert!(includes.join("match-all-result.asciidoc").exists());
    }

    #[test]
    fn adjacent_placeholders_both_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("a", "first"), ("b", "second")]);

        let out = substitute("@@a@@b", "doc", &snippets, dir.path(), &mut materializer).unwrap();

        assert_eq!(
            out,
            "include::includes/doc-a.asciidoc[]include::includes/doc-b.asciidoc[]"
        );
        let includes = dir.path().join("includes");
        assert_eq!(fs::read_to_string(includes.join("doc-a.asciidoc")).unwrap(), "first");
        assert_eq!(fs::read_to_string(includes.join("doc-b.asciidoc")).unwrap(), "second");
    }

    #[test]
    fn missing_snippet_is_dropped_silently() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = SnippetMap::new();

        let out = substitute(
            "before @@no-such-snippet after",
            "doc",
            &snippets,
            dir.path(),
            &mut materializer,
        )
        .unwrap();

        assert_eq!(out, "before  after");
        assert!(!out.contains("no-such-snippet"));
        assert!(!dir.path().join("includes").exists());
    }

    #[test]
    fn lone_at_signs_are_literal() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("b", "bee")]);

        let out = substitute(
            "email me @home or @@ alone or a@@b? no: a@b",
            "doc",
            &snippets,
            dir.path(),
            &mut materializer,
        )
        .unwrap();
        assert_eq!(
            out,
            "email me @home or @@ alone or ainclude::includes/doc-b.asciidoc[]? no: a@b"
        );
    }

    #[test]
    fn placeholder_at_end_of_input_still_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("tail", "the end")]);

        let out = substitute("body\n@@tail", "doc", &snippets, dir.path(), &mut materializer)
            .unwrap();
        assert_eq!(out, "body\ninclude::includes/doc-tail.asciidoc[]");
    }

    #[test]
    fn identifier_chars_include_digits_underscore_dash() {
        let dir = tempfile::tempdir().unwrap();
        let mut materializer = Materializer::new();
        let snippets = map(&[("snip_2-b", "ok")]);

        let out = substitute("@@snip_2-b.", "doc", &snippets, dir.path(), &mut materializer)
            .unwrap();
        assert_eq!(out, "include::includes/doc-snip_2-b.asciidoc[].");
    }
}
