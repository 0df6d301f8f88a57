//! Counters reported with `--stats`.

use std::fmt;
use std::path::PathBuf;

/// Token counts for one input file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    pub tokens: usize,
    pub malformed: usize,
    pub out_of_range: usize,
    /// Accepted tokens, duplicates included.
    pub accepted: usize,
    /// Values written to the result file.
    pub unique: usize,
}

impl fmt::Display for FileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {}, Tokens: {}, Malformed: {}, Out of range: {}, Accepted: {}, Unique: {}",
            self.lines, self.tokens, self.malformed, self.out_of_range, self.accepted, self.unique
        )
    }
}

/// Outcome of processing one file successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub result: PathBuf,
    pub stats: FileStats,
}

/// Per-run counters of the directory driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    /// Eligible files that disappeared before they could be read.
    pub skipped: usize,
    /// Eligible files whose read or write failed.
    pub failed: usize,
    /// Directory entries that were not eligible.
    pub ignored: usize,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        self.skipped > 0 || self.failed > 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed: {}, Skipped: {}, Failed: {}, Ignored: {}",
            self.processed, self.skipped, self.failed, self.ignored
        )
    }
}
