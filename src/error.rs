//! Crate-level error type and `Result` alias.
//!
//! Token-level problems (malformed literals, out-of-range values) are not
//! errors; they are classified by [`crate::tokens::classify_token`] and only
//! show up in the statistics. Everything here is an I/O or configuration
//! failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while processing input files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("The input directory '{}' does not exist.", path.display())]
    InputDirNotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Input file '{}' does not exist.", path.display())]
    InputFileNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid range: min ({min}) > max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid file extension: {0:?}")]
    InvalidExtension(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for the per-file "input vanished" case, which the batch driver
    /// counts as skipped rather than failed.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::InputFileNotFound { .. })
    }
}
