//! Directory driver.
//!
//! Applies [`process_file`] to every eligible file of the input directory,
//! one after another, in file-name order. A missing input directory is fatal
//! and checked before anything is created; per-file failures are reported
//! and counted, and the loop moves on to the next file.

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::merge_sort::merge_sort_by;
use crate::pipeline::process_file;
use crate::stats::{BatchSummary, FileReport};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fail unless `dir` exists and is a directory.
pub fn check_input_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::InputDirNotFound {
            path: dir.to_path_buf(),
        }),
        Err(e) => Err(Error::Read {
            path: dir.to_path_buf(),
            source: e,
        }),
    }
}

/// Eligible regular files of the input directory, sorted by file name, plus
/// the number of entries that were ignored.
pub fn eligible_files(config: &BatchConfig) -> Result<(Vec<PathBuf>, usize)> {
    let read_err = |e: io::Error| Error::Read {
        path: config.input_dir.clone(),
        source: e,
    };

    let mut files = Vec::new();
    let mut ignored = 0;
    for entry in fs::read_dir(&config.input_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let name = entry.file_name();

        if path.is_file() && config.is_eligible(&name.to_string_lossy()) {
            files.push(path);
        } else {
            debug!("Ignoring: {}", path.display());
            ignored += 1;
        }
    }

    let files = merge_sort_by(files, |a, b| a.file_name().cmp(&b.file_name()));
    Ok((files, ignored))
}

/// Process the whole input directory.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary> {
    run_batch_with(config, |_| {})
}

/// Process the whole input directory, handing each successful file's report
/// to `on_report`.
pub fn run_batch_with<F>(config: &BatchConfig, mut on_report: F) -> Result<BatchSummary>
where
    F: FnMut(&FileReport),
{
    check_input_dir(&config.input_dir)?;

    fs::create_dir_all(&config.output_dir).map_err(|e| Error::Write {
        path: config.output_dir.clone(),
        source: e,
    })?;

    info!("Input Directory: {}", config.input_dir.display());
    info!("Output Directory: {}", config.output_dir.display());

    let (files, ignored) = eligible_files(config)?;
    let mut summary = BatchSummary {
        ignored,
        ..Default::default()
    };

    for input in files {
        // Eligible entries always have a file name.
        let Some(name) = input.file_name() else {
            continue;
        };
        let output_base = config.output_dir.join(name);

        match process_file(&input, &output_base, &config.pipeline) {
            Ok(report) => {
                info!(
                    "Processed: {} -> {}",
                    report.input.display(),
                    report.result.display()
                );
                on_report(&report);
                summary.processed += 1;
            }
            Err(e) if e.is_missing_input() => {
                warn!("{}", e);
                summary.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", input.display(), e);
                summary.failed += 1;
            }
        }
    }

    info!("Batch processing complete. {}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_input_dir() {
        let dir = tempdir().unwrap();
        assert!(check_input_dir(dir.path()).is_ok());

        let missing = dir.path().join("nope");
        assert!(matches!(
            check_input_dir(&missing),
            Err(Error::InputDirNotFound { .. })
        ));

        let file = dir.path().join("file.txt");
        fs::write(&file, "1").unwrap();
        assert!(matches!(
            check_input_dir(&file),
            Err(Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_eligible_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("c.csv"), "").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let config = BatchConfig::new(dir.path(), dir.path().join("out"));
        let (files, ignored) = eligible_files(&config).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(ignored, 2);
    }

    #[test]
    fn test_missing_input_dir_creates_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let config = BatchConfig::new(dir.path().join("missing"), &out);

        let err = run_batch(&config).unwrap_err();
        assert!(matches!(err, Error::InputDirNotFound { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_batch() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("deep").join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("one.txt"), "3 1 2\n").unwrap();
        fs::write(input.join("two.txt"), "3 3 3\n3").unwrap();
        fs::write(input.join("notes.md"), "9 8 7").unwrap();

        let config = BatchConfig::new(&input, &output);
        let mut seen = Vec::new();
        let summary = run_batch_with(&config, |r| seen.push(r.stats.unique)).unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.ignored, 1);
        assert!(!summary.has_failures());
        assert_eq!(seen, vec![3, 1]);

        assert_eq!(
            fs::read_to_string(output.join("one.txt_results.txt")).unwrap(),
            "1\n2\n3\n"
        );
        assert_eq!(
            fs::read_to_string(output.join("two.txt_results.txt")).unwrap(),
            "3\n"
        );
        assert!(!output.join("notes.md_results.txt").exists());
        assert_eq!(fs::read_dir(&output).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_ignored() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("b.txt"), "1").unwrap();
        // Dangling symlink: not a regular file, so it is ignored up front.
        symlink(dir.path().join("gone"), input.join("a.txt")).unwrap();

        let summary = run_batch(&BatchConfig::new(&input, &output)).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.ignored, 1);
        assert!(output.join("b.txt_results.txt").exists());
    }

    #[test]
    fn test_unwritable_result_is_counted() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        fs::create_dir(&input).unwrap();
        fs::create_dir(&output).unwrap();
        fs::write(input.join("a.txt"), "1").unwrap();
        fs::write(input.join("b.txt"), "2").unwrap();
        // A directory where a.txt's result file should go.
        fs::create_dir(output.join("a.txt_results.txt")).unwrap();

        let summary = run_batch(&BatchConfig::new(&input, &output)).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert_eq!(
            fs::read_to_string(output.join("b.txt_results.txt")).unwrap(),
            "2\n"
        );
    }
}
