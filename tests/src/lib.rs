//! Helpers shared by the workspace integration tests.

use std::fs;

use calc::{run_files, InterpreterConfig, RunSummary};
use tempfile::TempDir;

/// Write `source` to a fresh input file, run the interpreter over it and
/// return the output file's contents with the run summary.
pub fn interpret_source(source: &str, config: &InterpreterConfig) -> (String, RunSummary) {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, source).expect("write input");

    let summary = run_files(&input, &output, config).expect("interpreter run");
    let report = fs::read_to_string(&output).expect("read output");
    (report, summary)
}

/// Run with the default configuration and return only the report
pub fn interpret(source: &str) -> String {
    interpret_source(source, &InterpreterConfig::default()).0
}
