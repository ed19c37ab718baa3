//! The line loop: read, skip blanks, echo, interpret, report.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use calc_lexer::{is_blank, scan_line, Lexer, TokenType};
use calc_parser::evaluate_with;
use log::{debug, info};

use crate::config::{InterpreterConfig, Mode};
use crate::error::{DriverError, DriverResult};
use crate::report::LineOutcome;

/// Counts collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, blank or not
    pub lines: usize,
    /// Blank lines that produced no output
    pub skipped: usize,
    /// Lines that produced an error block
    pub failed: usize,
}

/// Interpret one non-blank line.
///
/// The lexical scan runs first; the line is only evaluated or listed when
/// the scan finds nothing wrong.
pub fn interpret_line(line: &str, line_number: usize, config: &InterpreterConfig) -> LineOutcome {
    if let Err(err) = scan_line(line) {
        return LineOutcome::Lexical(err);
    }

    match config.mode {
        Mode::Evaluate => match evaluate_with(line, config.parser) {
            Ok(value) => LineOutcome::Value(value),
            Err(err) => LineOutcome::Failed(err),
        },
        Mode::Tokens => LineOutcome::Tokens(list_tokens(line, line_number)),
    }
}

/// Concatenate the lexemes of `line`, ending a row after every `;`.
///
/// Lexemes after the last `;` form a final row of their own.
pub fn list_tokens(line: &str, line_number: usize) -> String {
    let mut listing = String::new();
    for token in Lexer::with_line(line, line_number) {
        listing.push_str(token.lexeme);
        if token.acts_as(TokenType::Semicolon) {
            listing.push('\n');
        }
    }
    if !listing.is_empty() && !listing.ends_with('\n') {
        listing.push('\n');
    }
    listing
}

/// Interpret every line of `input`, writing the report to `output`
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &InterpreterConfig,
) -> DriverResult<RunSummary> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let line_number = summary.lines + 1;
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|source| DriverError::Read {
                line: line_number,
                source,
            })?;
        if read == 0 {
            break;
        }
        summary.lines = line_number;

        let line = String::from_utf8_lossy(&buf);
        if is_blank(&line) {
            summary.skipped += 1;
            continue;
        }

        let text = line.strip_suffix('\n').unwrap_or(&*line);
        let outcome = interpret_line(text, line_number, config);
        debug!("line {line_number}: {outcome:?}");
        if outcome.is_error() {
            summary.failed += 1;
        }

        writeln!(output, "{text}").map_err(DriverError::Write)?;
        write!(output, "{outcome}").map_err(DriverError::Write)?;
    }

    output.flush().map_err(DriverError::Write)?;
    info!(
        "{} line(s) read, {} blank, {} with errors",
        summary.lines, summary.skipped, summary.failed
    );
    Ok(summary)
}

/// Interpret the file at `input`, writing the report to a new file at
/// `output`
pub fn run_files(
    input: &Path,
    output: &Path,
    config: &InterpreterConfig,
) -> DriverResult<RunSummary> {
    let reader = File::open(input).map_err(|source| DriverError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| DriverError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!("interpreting {} into {}", input.display(), output.display());
    let mut writer = BufWriter::new(writer);
    run(BufReader::new(reader), &mut writer, config)
}
