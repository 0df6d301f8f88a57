//! distinct-ints CLI
//!
//! Usage: distinct-ints [OPTIONS]

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use distinct_ints::config::{self, DEFAULT_EXTENSION, DEFAULT_SUFFIX};
use distinct_ints::{
    process_file, run_batch_with, BatchConfig, Error, PipelineConfig, ValueRange,
};

#[derive(Parser)]
#[command(name = "distinct-ints")]
#[command(version)]
#[command(about = "Extract, deduplicate and merge-sort bounded integers from text files", long_about = None)]
struct Cli {
    /// Directory of input files (default: ../../sample_inputs next to the executable)
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory for result files, created if missing (default: ../../sample_results next to the executable)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Process a single input file instead of a directory
    #[arg(short, long, requires = "output", conflicts_with_all = ["input_dir", "output_dir"])]
    input: Option<PathBuf>,

    /// Output base path for single-file mode (the suffix is appended)
    #[arg(short, long, requires = "input")]
    output: Option<PathBuf>,

    /// Suffix appended to each input file name to form the result name
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Only process files whose name ends with this string
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Smallest accepted value
    #[arg(long, default_value_t = ValueRange::DEFAULT.min, allow_negative_numbers = true)]
    min: i64,

    /// Largest accepted value
    #[arg(long, default_value_t = ValueRange::DEFAULT.max, allow_negative_numbers = true)]
    max: i64,

    /// Exit with a non-zero status if any file was skipped or failed
    #[arg(long)]
    strict: bool,

    /// Print per-file and run statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Returns Ok(false) when the run finished but should report failure.
fn run(cli: Cli) -> Result<bool, Error> {
    let range = ValueRange::new(cli.min, cli.max)?;
    let pipeline = PipelineConfig::default()
        .with_range(range)
        .with_suffix(cli.suffix);

    if let (Some(input), Some(output)) = (cli.input, cli.output) {
        return run_single(&input, &output, &pipeline, cli.stats, cli.strict);
    }

    let (input_dir, output_dir) = match (cli.input_dir, cli.output_dir) {
        (Some(input), Some(output)) => (input, output),
        (input, output) => {
            let (default_input, default_output) = config::default_dirs()?;
            (
                input.unwrap_or(default_input),
                output.unwrap_or(default_output),
            )
        }
    };

    let batch = BatchConfig::new(
        config::absolutize(&input_dir),
        config::absolutize(&output_dir),
    )
    .with_extension(cli.extension)?
    .with_pipeline(pipeline)
    .with_strict(cli.strict);

    let stats = cli.stats;
    let summary = run_batch_with(&batch, |report| {
        if stats {
            eprintln!("{}: {}", report.input.display(), report.stats);
        }
    })?;

    if stats {
        eprintln!("Batch stats: {}", summary);
    }

    Ok(!(batch.strict && summary.has_failures()))
}

fn run_single(
    input: &Path,
    output: &Path,
    pipeline: &PipelineConfig,
    stats: bool,
    strict: bool,
) -> Result<bool, Error> {
    match process_file(input, output, pipeline) {
        Ok(report) => {
            info!(
                "Processed: {} -> {}",
                report.input.display(),
                report.result.display()
            );
            if stats {
                eprintln!("{}: {}", report.input.display(), report.stats);
            }
            Ok(true)
        }
        // A missing file is reported, not fatal, unless --strict.
        Err(e) if e.is_missing_input() => {
            eprintln!("{}", e);
            Ok(!strict)
        }
        Err(e) => Err(e),
    }
}
