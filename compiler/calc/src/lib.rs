//! Calc statement interpreter
//!
//! Reads a file of semicolon-terminated integer statements, scans each line
//! for malformed lexemes, evaluates the first statement of every clean line
//! and writes a report block per line.

pub mod config;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{InterpreterConfig, Mode};
pub use driver::{interpret_line, list_tokens, run, run_files, RunSummary};
pub use error::{DriverError, DriverResult};
pub use report::{expected_text, LineOutcome};
