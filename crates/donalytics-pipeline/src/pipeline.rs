//! Per-row orchestration and the streaming driver.
//!
//! Each row goes through validation, then the donor ledger, and only repeat
//! donations reach the recipient aggregator. Every repeat donation yields
//! exactly one output line describing its bucket right after the append.
//! Rows are handled strictly in arrival order, one at a time.

use std::io::{Read, Write};

use csv::{ByteRecord, Reader, ReaderBuilder};
use donalytics_core::{ContributionRecord, PipelineConfig, Rejection, Result};

use crate::aggregate::RecipientAggregator;
use crate::counters::RunCounters;
use crate::ledger::{DonorLedger, LedgerVerdict};
use crate::output::RepeatContribution;

/// What happened to one row.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The row failed validation and was dropped.
    Rejected(Rejection),
    /// Valid row from a donor not seen before.
    FirstSeen,
    /// Valid row from a known donor, not after their first year.
    Stale,
    /// Repeat donation, with the bucket snapshot to emit.
    Repeat(RepeatContribution),
}

impl Outcome {
    /// The emitted snapshot, if this was a repeat donation.
    pub fn repeat(&self) -> Option<&RepeatContribution> {
        match self {
            Outcome::Repeat(contribution) => Some(contribution),
            _ => None,
        }
    }
}

/// Single-pass repeat-donor pipeline.
///
/// Owns the ledger, the aggregator and the run counters for the lifetime of
/// one run.
#[derive(Debug)]
pub struct RecordPipeline {
    config: PipelineConfig,
    ledger: DonorLedger,
    aggregator: RecipientAggregator,
    counters: RunCounters,
}

impl RecordPipeline {
    /// Creates a pipeline with empty state.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            ledger: DonorLedger::new(),
            aggregator: RecipientAggregator::new(),
            counters: RunCounters::default(),
        }
    }

    /// Processes one row of raw fields.
    ///
    /// A rejected row is an [`Outcome`], not an error. The only error is a
    /// bucket sum leaving the exact decimal range, which is fatal for the run.
    pub fn process(&mut self, row: &ByteRecord) -> Result<Outcome> {
        let record = match ContributionRecord::from_fields(row, &self.config.layout) {
            Ok(record) => record,
            Err(rejection) => {
                self.counters.record_rejected();
                return Ok(Outcome::Rejected(rejection));
            }
        };
        self.counters.record_valid();

        let outcome = match self
            .ledger
            .classify(&record.zone, &record.donor_name, record.year)
        {
            LedgerVerdict::FirstSeen => Outcome::FirstSeen,
            LedgerVerdict::Stale => Outcome::Stale,
            LedgerVerdict::Repeat => {
                let bucket = self.aggregator.append(
                    &record.zone,
                    &record.committee_id,
                    record.year,
                    record.amount,
                )?;
                let contribution =
                    RepeatContribution::from_bucket(&record, bucket, self.config.percentile);
                self.counters.record_repeat();
                Outcome::Repeat(contribution)
            }
        };
        Ok(outcome)
    }

    /// Processes every row in `text` and returns their outcomes in order.
    ///
    /// Rows are split exactly as [`RecordPipeline::run`] splits them, so a
    /// bare `\r` ends a row here too. Empty lines yield no outcome.
    pub fn process_text(&mut self, text: &str) -> Result<Vec<Outcome>> {
        let mut reader = self.reader(text.as_bytes());
        let mut outcomes = Vec::new();
        for raw in reader.byte_records() {
            outcomes.push(self.step(&raw?)?);
        }
        Ok(outcomes)
    }

    /// Streams every row of `input` and writes one line per repeat donation.
    ///
    /// Fields are checked on their lossy UTF-8 decoding, so stray non-UTF-8
    /// bytes only affect the row they appear in. Returns the counters after
    /// the last row; a read or write failure aborts the run.
    pub fn run<R: Read, W: Write>(&mut self, input: R, mut output: W) -> Result<RunCounters> {
        tracing::info!(percentile = %self.config.percentile, "Starting repeat-donor run");

        let mut reader = self.reader(input);
        for raw in reader.byte_records() {
            if let Outcome::Repeat(contribution) = self.step(&raw?)? {
                writeln!(output, "{contribution}")?;
            }
        }
        output.flush()?;

        let counters = self.counters;
        tracing::info!(
            total = counters.total,
            valid = counters.valid,
            repeat = counters.repeat,
            donors = self.ledger.len(),
            buckets = self.aggregator.bucket_count(),
            "Repeat-donor run complete"
        );
        Ok(counters)
    }

    fn reader<R: Read>(&self, input: R) -> Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.config.layout.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(input)
    }

    fn step(&mut self, raw: &ByteRecord) -> Result<Outcome> {
        let line = raw.position().map_or(0, |pos| pos.line());
        let outcome = self.process(raw)?;
        match &outcome {
            Outcome::Rejected(rejection) => {
                tracing::debug!(line, reason = %rejection, "Dropped invalid record");
            }
            Outcome::Repeat(contribution) => {
                tracing::trace!(line, output = %contribution, "Repeat donation");
            }
            Outcome::FirstSeen | Outcome::Stale => {}
        }
        Ok(outcome)
    }

    /// Counters accumulated so far.
    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// The donor ledger.
    pub fn ledger(&self) -> &DonorLedger {
        &self.ledger
    }

    /// The recipient aggregator.
    pub fn aggregator(&self) -> &RecipientAggregator {
        &self.aggregator
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
