//! Per-file pipeline: tokenize, deduplicate, merge sort, write.
//!
//! The input is fully read before the result file is created, so a read
//! failure never truncates a previous result. Both files are closed before
//! [`process_file`] returns, whatever the outcome.

use crate::config::{PipelineConfig, ValueRange};
use crate::error::{Error, Result};
use crate::merge_sort::{is_strictly_ascending, merge_sort};
use crate::output::ResultWriter;
use crate::stats::{FileReport, FileStats};
use crate::tokens::scan_line;
use crate::unique::UniqueSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default line buffer capacity.
const LINE_BUFFER: usize = 1024;

/// Append `suffix` to the last component of `output_base`:
/// `out/a.txt` + `_results.txt` -> `out/a.txt_results.txt`.
pub fn result_path(output_base: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = output_base.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Read every line of `reader` and return the distinct accepted values in
/// ascending order.
///
/// A final line without a trailing newline is handled like any other.
pub fn distinct_sorted<R: BufRead>(
    mut reader: R,
    range: ValueRange,
) -> io::Result<(Vec<i64>, FileStats)> {
    let mut set = UniqueSet::new();
    let mut stats = FileStats::default();
    let mut line = Vec::with_capacity(LINE_BUFFER);

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        scan_line(&line, range, &mut set, &mut stats);
    }

    let values = merge_sort(set.into_vec());
    stats.unique = values.len();
    debug_assert!(is_strictly_ascending(&values));
    Ok((values, stats))
}

/// Write sorted values, one per line, and flush.
pub fn write_values<W: Write>(output: W, values: &[i64]) -> io::Result<W> {
    let mut writer = ResultWriter::new(output);
    writer.write_all_values(values)?;
    writer.finish()
}

/// Run the pipeline for one file.
///
/// The result is written to `result_path(output_base, &config.suffix)`.
/// Returns [`Error::InputFileNotFound`] if `input` does not exist.
pub fn process_file(
    input: &Path,
    output_base: &Path,
    config: &PipelineConfig,
) -> Result<FileReport> {
    let file = File::open(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputFileNotFound {
            path: input.to_path_buf(),
        },
        _ => Error::Read {
            path: input.to_path_buf(),
            source: e,
        },
    })?;

    let (values, stats) =
        distinct_sorted(BufReader::new(file), config.range).map_err(|e| Error::Read {
            path: input.to_path_buf(),
            source: e,
        })?;
    debug!("{}: {}", input.display(), stats);

    let result = result_path(output_base, &config.suffix);
    let write_err = |e: io::Error| Error::Write {
        path: result.clone(),
        source: e,
    };
    let out = File::create(&result).map_err(write_err)?;
    write_values(out, &values).map_err(write_err)?;

    Ok(FileReport {
        input: input.to_path_buf(),
        result,
        stats,
    })
}
