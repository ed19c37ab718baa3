use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a whole interpreter run
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not open {} for reading: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("could not open {} for writing: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("failed to read line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

pub type DriverResult<T> = Result<T, DriverError>;
