//! Command execution for the ds62 code generator
//!
//! Runs the Reader -> Extractor -> Emitter pipeline, writes the module
//! atomically and reports the outcome.

use anyhow::Context;
use colored::Colorize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::app::services::code_emitter::{CodeEmitter, EmitStats};
use crate::app::services::covariance::build_covariance;
use crate::app::services::dataset_reader::read_dataset;
use crate::app::services::record_extractor::extract_all;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::{DATASET_PROVIDER, DATASET_URL};
use crate::{Error, Result};

/// Outcome of one conversion run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub stats: EmitStats,
    pub elapsed: Duration,
}

/// Main command runner
pub fn run(args: Args) -> anyhow::Result<RunSummary> {
    setup_logging(&args).context("Failed to initialize logging")?;

    let config = args.to_config();
    config.validate().context("Invalid configuration")?;

    let started = Instant::now();
    let stats = convert(&config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    let summary = RunSummary {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        stats,
        elapsed: started.elapsed(),
    };

    if !args.quiet {
        print_summary(&summary);
    }

    Ok(summary)
}

/// Read, extract, build the covariance and write the generated module
pub fn convert(config: &Config) -> Result<EmitStats> {
    let dataset = read_dataset(&config.input_path)?;
    let endmembers = extract_all(&dataset)?;
    let covariance = build_covariance(&dataset)?;

    let emitter = CodeEmitter::new(config.emitter.clone());
    let stats = write_atomically(&config.output_path, |out| {
        emitter.emit(out, &endmembers, &covariance)
    })?;

    info!("Wrote {}", config.output_path.display());
    Ok(stats)
}

/// Write through a temporary file in the destination directory, then rename
///
/// Nothing appears at `path` unless `write` succeeds.
pub fn write_atomically<T>(
    path: &Path,
    write: impl FnOnce(&mut dyn Write) -> Result<T>,
) -> Result<T> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        Error::io(
            format!("Failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;
    debug!("Writing to temporary file {}", temp.path().display());

    let value = {
        let mut writer = BufWriter::new(&mut temp);
        let value = write(&mut writer as &mut dyn Write)?;
        writer
            .flush()
            .map_err(|e| Error::io("Failed to flush generated module", e))?;
        value
    };

    temp.persist(path).map_err(|e| {
        Error::io(format!("Failed to move output into {}", path.display()), e.error)
    })?;

    Ok(value)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hp_ds62_codegen={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("logging already initialized: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Explain where to get the dataset when it is missing
pub fn print_missing_input_guidance(path: &str) {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    println!("This code requires the data file {}.", file_name);
    println!(
        "This file is bundled with the software package {}, which can be found here:",
        DATASET_PROVIDER
    );
    println!("{}", DATASET_URL);
    println!();
    println!("Please download the file and place it in this directory.");
}

/// Print the run summary
pub fn print_summary(summary: &RunSummary) {
    let stats = &summary.stats;

    println!("\n{}", "Dataset conversion complete".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Input: {}", summary.input_path.display());
    println!("   • Output: {}", summary.output_path.display().to_string().bright_cyan());
    println!("   • Records read: {}", stats.records_seen);
    println!(
        "   • Classes emitted: {} ({:.1}%)",
        stats.classes_emitted,
        stats.emission_rate()
    );
    println!("   • Records skipped: {}", stats.records_skipped);
    println!(
        "   • Order/disorder modifiers: {} Landau, {} Bragg-Williams",
        stats.landau_blocks, stats.bragg_williams_blocks
    );
    println!(
        "   • Covariance matrix: {}x{}",
        stats.covariance_dimension, stats.covariance_dimension
    );
    println!("   • Processing time: {:.2?}", summary.elapsed);
    println!();
}
