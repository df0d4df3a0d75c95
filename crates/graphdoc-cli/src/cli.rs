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

//! Command-line surface of the `graphdoc` binary

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for generated documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// AsciiDoc markup (the publication format)
    Asciidoc,
    /// Raw metadata records as JSON, for programmatic use
    Json,
}

/// Generate reference documentation for the Graphtide database
#[derive(Parser, Debug)]
#[command(name = "graphdoc")]
#[command(about = "Generate AsciiDoc reference documentation from database metadata")]
#[command(version)]
pub struct Cli {
    /// Write output to this file instead of standard output
    #[arg(long, short = 'o', value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "asciidoc", global = true)]
    pub format: OutputFormat,

    /// Suppress the processed-item summary
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per metadata source
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration settings reference
    Config,
    /// Management bean reference
    Beans {
        /// Glob pattern selecting beans by name
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Detail section for a single management bean
    Bean {
        /// Exact bean name as registered
        name: String,
    },
    /// Published metrics reference
    Metrics {
        /// Sections to render (all when omitted)
        sections: Vec<String>,
    },
    /// Query function signatures
    Functions,
}
