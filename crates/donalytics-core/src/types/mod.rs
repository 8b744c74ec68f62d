//! Core domain types for contribution records.

mod ids;
mod proptests;

pub use ids::{CommitteeId, DonorName, ZipZone};

/// Calendar year of a transaction (1..=9999).
pub type Year = u16;
