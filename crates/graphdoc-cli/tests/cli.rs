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

//! Integration tests for the graphdoc binary

use assert_cmd::Command;
use predicates::prelude::*;

fn graphdoc() -> Command {
    Command::cargo_bin("graphdoc").unwrap()
}

#[test]
fn config_renders_settings_table_to_stdout() {
    graphdoc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[config-settings]]"))
        .stdout(predicate::str::contains(
            "<<config_db.checkpoint.interval.time,db.checkpoint.interval.time>>",
        ))
        .stderr(predicate::str::contains("Processed 7 settings."));
}

#[test]
fn quiet_suppresses_summary() {
    graphdoc()
        .args(["--quiet", "config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed").not());
}

#[test]
fn beans_filtered_by_pattern() {
    graphdoc()
        .args(["beans", "Page*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[jmx-page-cache]]"))
        .stdout(predicate::str::contains("ifdef::nonhtmloutput[]"))
        .stdout(predicate::str::contains("Kernel").not());
}

#[test]
fn bean_by_exact_name() {
    graphdoc()
        .args(["bean", "Kernel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[jmx-kernel]]"))
        .stderr(predicate::str::contains("Processed 1 beans."));
}

#[test]
fn bean_unknown_name_fails_nonzero() {
    graphdoc()
        .args(["bean", "Locking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no management bean named 'Locking'"));
}

#[test]
fn beans_invalid_pattern_fails_nonzero() {
    graphdoc()
        .args(["beans", "["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bean query pattern"));
}

#[test]
fn metrics_unknown_section_fails_nonzero() {
    graphdoc()
        .args(["metrics", "bolt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no metrics section named 'bolt'"));
}

#[test]
fn functions_sorted_by_signature() {
    graphdoc()
        .arg("functions")
        .assert()
        .success()
        .stdout(predicate::str::contains("|abs|abs(input :: FLOAT) :: FLOAT|"));
}

#[test]
fn output_flag_writes_file_and_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("docs").join("metrics.asciidoc");

    graphdoc()
        .args(["metrics", "--output"])
        .arg(&out)
        .assert()
        .success()
        // with the document in a file the summary may use stdout
        .stdout(predicate::str::contains("Processed 7 metrics."));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("[[metrics-transaction]]"));
    assert!(content.contains("|db.transaction.active|"));
}

#[test]
fn json_format_is_parseable() {
    let output = graphdoc()
        .args(["--format", "json", "functions"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().unwrap().len() >= 8);
}
