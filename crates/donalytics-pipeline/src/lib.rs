#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Donalytics Pipeline
//!
//! Single-pass processing of contribution rows: validation, repeat-donor
//! classification, per-recipient bucketing and running percentile output.
//!
//! # Modules
//!
//! - [`ledger`]: first-seen year per donor
//! - [`aggregate`]: amounts bucketed by zone, recipient and year
//! - [`percentile`]: nearest-rank percentile and round-half-up
//! - [`output`]: the emitted line
//! - [`pipeline`]: per-row orchestration and the streaming driver

pub mod aggregate;
pub mod counters;
pub mod ledger;
pub mod output;
pub mod percentile;
pub mod pipeline;

pub use aggregate::{Bucket, RecipientAggregator};
pub use counters::RunCounters;
pub use ledger::{DonorLedger, LedgerVerdict};
pub use output::RepeatContribution;
pub use pipeline::{Outcome, RecordPipeline};

// Re-export core types
pub use donalytics_core::{Error, Result};
