#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Donalytics Core Library
//!
//! Shared types for the repeat-donor pipeline: the error type, domain
//! identifiers, the per-field validator, the contribution record parsed from
//! one row of raw fields, and the percentile configuration.

pub mod config;
pub mod error;
pub mod record;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use config::{Percentile, PipelineConfig};
pub use error::{Error, Result};
pub use record::{ContributionRecord, RecordLayout, Rejection};
pub use rust_decimal::Decimal;
pub use types::{CommitteeId, DonorName, Year, ZipZone};
pub use validate::FieldKind;
