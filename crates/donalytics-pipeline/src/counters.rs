//! Run tallies exposed to the reporting side.

use serde::{Deserialize, Serialize};

/// Counts accumulated over one run.
///
/// Always `total >= valid >= repeat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    /// Non-empty rows seen
    pub total: u64,
    /// Rows that passed validation (including stale ones)
    pub valid: u64,
    /// Rows classified as repeat donations
    pub repeat: u64,
}

impl RunCounters {
    /// Rows dropped by validation.
    pub fn invalid(&self) -> u64 {
        self.total - self.valid
    }

    pub(crate) fn record_rejected(&mut self) {
        self.total += 1;
    }

    pub(crate) fn record_valid(&mut self) {
        self.total += 1;
        self.valid += 1;
    }

    pub(crate) fn record_repeat(&mut self) {
        self.repeat += 1;
    }
}
