//! distinct-ints: bounded integer extraction, deduplication and merge sort
//! over batches of text files.
//!
//! Each input file goes through the same four stages:
//!
//! - **Tokenize/filter**: whitespace-separated `[+-]?[0-9]+` literals within
//!   the accepted range (default `[-1023, 1023]`)
//! - **Deduplicate**: collapse repeated values across the whole file
//! - **Sort**: explicit recursive merge sort, ascending
//! - **Write**: one value per line to `<output dir>/<file name>_results.txt`
//!
//! # Example
//!
//! ```rust,no_run
//! use distinct_ints::{run_batch, BatchConfig};
//!
//! let config = BatchConfig::new("sample_inputs", "sample_results");
//! let summary = run_batch(&config).unwrap();
//! println!("{}", summary);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod merge_sort;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod tokens;
pub mod unique;

// Re-export commonly used types
pub use batch::{run_batch, run_batch_with};
pub use config::{BatchConfig, PipelineConfig, ValueRange};
pub use error::{Error, Result};
pub use merge_sort::{merge_sort, merge_sort_by};
pub use pipeline::{distinct_sorted, process_file, result_path};
pub use stats::{BatchSummary, FileReport, FileStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{run_batch, run_batch_with};
    pub use crate::config::{BatchConfig, PipelineConfig, ValueRange};
    pub use crate::error::{Error, Result};
    pub use crate::merge_sort::{merge_sort, merge_sort_by};
    pub use crate::pipeline::{distinct_sorted, process_file, result_path};
    pub use crate::stats::{BatchSummary, FileReport, FileStats};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::config::ValueRange;
        use crate::merge_sort::merge_sort;
        use crate::tokens::accepted_values;
        use crate::unique::UniqueSet;

        let content = "5 -10 abc 2000 -1023 1023\n5 5\n";
        let mut set = UniqueSet::new();
        for line in content.lines() {
            set.extend(accepted_values(line.as_bytes(), ValueRange::DEFAULT));
        }

        let sorted = merge_sort(set.into_vec());
        assert_eq!(sorted, vec![-1023, -10, 5, 1023]);
    }

    #[test]
    fn test_output_is_fixed_point_of_sorting() {
        use crate::pipeline::distinct_sorted;
        use crate::{merge_sort, ValueRange};

        let (values, _) =
            distinct_sorted(&b"9 -4 0 9 1000 -1000 3"[..], ValueRange::DEFAULT).unwrap();
        assert_eq!(merge_sort(values.clone()), values);
    }
}
