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

//! `graphdoc` entry point

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use graphdoc_asciidoc::Materializer;
use graphdoc_cli::cli::Cli;
use graphdoc_cli::execute;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {e:#}", "error".red().bold());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let generated = execute(cli).context("documentation generation failed")?;

    match &cli.output {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .context("output path has no filename")?;
            let materializer = Materializer::new();
            materializer
                .write(directory, filename, &generated.body)
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => print!("{}", generated.body),
    }

    if !cli.quiet {
        // the summary goes to stdout unless the document itself is
        // streaming there
        let summary = format!("Processed {} {}.", generated.processed, generated.noun);
        match &cli.output {
            Some(_) => println!("{summary}"),
            None => eprintln!("{summary}"),
        }
    }
    Ok(())
}
