//! The line emitted for every repeat donation.

use std::fmt;

use donalytics_core::{CommitteeId, ContributionRecord, Decimal, Percentile, Year, ZipZone};

use crate::aggregate::Bucket;
use crate::percentile::round_half_up;

/// Separator between output fields.
pub const OUTPUT_DELIMITER: char = '|';

/// Snapshot of a recipient bucket right after a repeat donation joined it.
///
/// Renders as `committee|zone|year|percentile|sum|count`, for example
/// `C00384516|02895|2018|333|333|1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatContribution {
    /// Recipient committee
    pub committee_id: CommitteeId,
    /// Donor postal zone
    pub zone: ZipZone,
    /// Transaction year
    pub year: Year,
    /// Running percentile, rounded half up to a whole number
    pub percentile: Decimal,
    /// Running sum of the bucket, without trailing zeros
    pub total_amount: Decimal,
    /// Running count of the bucket
    pub count: usize,
}

impl RepeatContribution {
    /// Builds the snapshot for `record` from the bucket it was appended to.
    pub fn from_bucket(record: &ContributionRecord, bucket: &Bucket, percentile: Percentile) -> Self {
        // append never leaves a bucket empty
        let value = bucket.percentile(percentile).unwrap_or_default();
        Self {
            committee_id: record.committee_id.clone(),
            zone: record.zone.clone(),
            year: record.year,
            percentile: round_half_up(value),
            total_amount: bucket.sum().normalize(),
            count: bucket.len(),
        }
    }
}

impl fmt::Display for RepeatContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = OUTPUT_DELIMITER;
        write!(
            f,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            self.committee_id, self.zone, self.year, self.percentile, self.total_amount, self.count
        )
    }
}
