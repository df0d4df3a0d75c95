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

//! The `graphdoc` command line tool
//!
//! Thin dispatch over the generators in `graphdoc-asciidoc`: each subcommand
//! walks one metadata source from [`builtin`] and yields a single document.

pub mod builtin;
pub mod cli;

use graphdoc_asciidoc::generators::{bean_docs, config_docs, function_docs, metrics_docs};
use graphdoc_core::{GraphdocError, Result};
use graphdoc_registry::beans::BeanRegistry;
use graphdoc_registry::functions::FunctionSource;

use crate::cli::{Cli, Commands, OutputFormat};

/// The rendered output of one subcommand
#[derive(Debug)]
pub struct Generated {
    /// Full document body
    pub body: String,
    /// Number of records that went into the document
    pub processed: usize,
    /// What was processed, for the summary line
    pub noun: &'static str,
}

/// Run one subcommand against the built-in registries
pub fn execute(cli: &Cli) -> Result<Generated> {
    match &cli.command {
        Commands::Config => {
            let registry = builtin::settings();
            let processed = registry.public_settings().count();
            let body = match cli.format {
                OutputFormat::Asciidoc => config_docs::generate(&registry)?,
                OutputFormat::Json => {
                    let settings: Vec<_> = registry.public_settings().collect();
                    to_json_string(&settings)?
                }
            };
            Ok(Generated {
                body,
                processed,
                noun: "settings",
            })
        }
        Commands::Beans { pattern } => {
            let registry = builtin::beans();
            let matched = registry.query(pattern)?;
            let body = match cli.format {
                OutputFormat::Asciidoc => bean_docs::generate(&registry, pattern)?,
                OutputFormat::Json => to_json_string(&matched)?,
            };
            Ok(Generated {
                body,
                processed: matched.len(),
                noun: "beans",
            })
        }
        Commands::Bean { name } => {
            let registry = builtin::beans();
            let body = match cli.format {
                OutputFormat::Asciidoc => bean_docs::generate_one(&registry, name)?,
                OutputFormat::Json => to_json_string(&registry.find(name)?)?,
            };
            Ok(Generated {
                body,
                processed: 1,
                noun: "beans",
            })
        }
        Commands::Metrics { sections } => {
            let registry = builtin::metrics();
            for name in sections {
                if registry.section(name).is_none() {
                    return Err(GraphdocError::metadata(format!(
                        "no metrics section named '{}'",
                        name
                    )));
                }
            }
            let body = match cli.format {
                OutputFormat::Asciidoc => metrics_docs::generate(&registry, sections)?,
                OutputFormat::Json => {
                    let mut map = serde_json::Map::new();
                    for (section, metrics) in registry.sections() {
                        if sections.is_empty() || sections.iter().any(|s| s == section) {
                            let value = serde_json::to_value(metrics).map_err(|e| {
                                GraphdocError::metadata(format!("JSON serialization failed: {e}"))
                            })?;
                            map.insert(section.to_string(), value);
                        }
                    }
                    to_json_string(&serde_json::Value::Object(map))?
                }
            };
            let processed = if sections.is_empty() {
                registry.len()
            } else {
                sections
                    .iter()
                    .filter_map(|s| registry.section(s))
                    .map(<[_]>::len)
                    .sum()
            };
            Ok(Generated {
                body,
                processed,
                noun: "metrics",
            })
        }
        Commands::Functions => {
            let source = builtin::functions();
            let records = source.functions()?;
            let body = match cli.format {
                OutputFormat::Asciidoc => function_docs::generate(&source)?,
                OutputFormat::Json => to_json_string(&records)?,
            };
            Ok(Generated {
                body,
                processed: records.len(),
                noun: "functions",
            })
        }
    }
}

fn to_json_string<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GraphdocError::metadata(format!("JSON serialization failed: {e}")))
}
