#![forbid(unsafe_code)]

//! Donalytics CLI
//!
//! File handling and reporting around the repeat-donor pipeline. The binary
//! in `main.rs` only parses arguments and prints; everything testable lives
//! here.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use donalytics_core::{Percentile, PipelineConfig};
use donalytics_pipeline::{RecordPipeline, RunCounters};

/// Find repeat donors and stream running contribution statistics
#[derive(Parser, Debug, Clone)]
#[command(name = "donalytics", author, version, about, long_about = None)]
pub struct Args {
    /// Pipe-delimited contribution records to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File whose first line holds the target percentile (0-100)
    #[arg(value_name = "PERCENTILE_FILE")]
    pub percentile: PathBuf,

    /// File to write repeat-donor lines to (truncated first)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Counters accumulated by the pipeline
    pub counters: RunCounters,
    /// Wall time spent from configuration load to the final flush
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counters;
        writeln!(f, "Complete")?;
        writeln!(
            f,
            "{} valid records in {} total records, and {} invalid records skipped.",
            c.valid,
            c.total,
            c.invalid()
        )?;
        writeln!(
            f,
            "Repeated donation records written into output file: {}",
            c.repeat
        )?;
        write!(
            f,
            "Total processing time: {} seconds",
            self.elapsed.as_secs_f64().round()
        )
    }
}

/// Installs the stderr log subscriber.
///
/// Honors `RUST_LOG`; defaults to `warn` so stdout carries only the report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the pipeline over the files named in `args`.
///
/// The percentile is loaded first: a bad percentile file aborts before the
/// output file is created or truncated.
pub fn run(args: &Args) -> Result<RunReport> {
    let started = Instant::now();

    let percentile = Percentile::load(&args.percentile).with_context(|| {
        format!(
            "Failed to load percentile from {}",
            args.percentile.display()
        )
    })?;
    tracing::debug!(%percentile, path = %args.percentile.display(), "Loaded percentile");

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open input {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("Failed to create output {}", args.output.display()))?;

    let mut pipeline = RecordPipeline::new(PipelineConfig::new(percentile));
    let counters = pipeline
        .run(BufReader::new(input), BufWriter::new(output))
        .with_context(|| format!("Run over {} failed", args.input.display()))?;

    Ok(RunReport {
        counters,
        elapsed: started.elapsed(),
    })
}
