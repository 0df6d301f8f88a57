//! Runtime configuration for the pipeline and the directory driver.
//!
//! Nothing here is global: every operation receives its configuration
//! explicitly, so the library can be driven by the CLI or by tests with
//! different directories and ranges side by side.

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default suffix appended to the input file name to form the result name.
pub const DEFAULT_SUFFIX: &str = "_results.txt";

/// Default file-name ending of eligible input files.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Directory names used when no directory is configured, resolved relative
/// to the executable (`<exe dir>/../../<name>`).
pub const DEFAULT_INPUT_DIR_NAME: &str = "sample_inputs";
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "sample_results";

/// Closed interval of accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    /// `[-1023, 1023]`
    pub const DEFAULT: ValueRange = ValueRange {
        min: -1023,
        max: 1023,
    };

    /// Build a range, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings for processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub range: ValueRange,
    /// Appended verbatim to the output base path.
    pub suffix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            range: ValueRange::DEFAULT,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Settings for a whole directory run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Case-sensitive file-name ending, e.g. `.txt`.
    pub extension: String,
    pub pipeline: PipelineConfig,
    /// Report failure through the exit status if any file failed.
    pub strict: bool,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            pipeline: PipelineConfig::default(),
            strict: false,
        }
    }

    /// Set the eligible file-name ending. An empty ending would match every
    /// entry, so it is rejected.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Result<Self> {
        let extension = extension.into();
        if extension.is_empty() {
            return Err(Error::InvalidExtension(extension));
        }
        self.extension = extension;
        Ok(self)
    }

    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether a directory entry name is eligible for processing.
    #[inline]
    pub fn is_eligible(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}

/// Default input and output directories, `../../sample_inputs` and
/// `../../sample_results` next to the running executable, made absolute.
pub fn default_dirs() -> Result<(PathBuf, PathBuf)> {
    let exe = env::current_exe()?;
    let base = exe.parent().unwrap_or_else(|| Path::new("."));
    let root = base.join("..").join("..");
    Ok((
        absolutize(&root.join(DEFAULT_INPUT_DIR_NAME)),
        absolutize(&root.join(DEFAULT_OUTPUT_DIR_NAME)),
    ))
}

/// Lexically resolve `.` and `..` without touching the filesystem, so paths
/// that do not exist yet still get a clean absolute form.
pub fn absolutize(path: &Path) -> PathBuf {
    use std::path::Component;

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
