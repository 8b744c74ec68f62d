#![forbid(unsafe_code)]

//! Donalytics CLI entry point.

use anyhow::Result;
use clap::Parser;
use donalytics_cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    donalytics_cli::init_tracing();

    println!("Running...");
    match donalytics_cli::run(&args) {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run aborted: {e:#}");
            Err(e)
        }
    }
}
