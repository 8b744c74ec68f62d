//! Recipient aggregation: repeat-donation amounts bucketed by postal zone,
//! recipient committee and year.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use donalytics_core::{CommitteeId, Decimal, Error, Percentile, Result, Year, ZipZone};

use crate::percentile;

// ============================================================================
// Bucket
// ============================================================================

/// Amounts for one `(zone, recipient, year)` key.
///
/// Keeps the amounts in arrival order, a sorted view maintained on every
/// push (so percentile lookups need no re-sort), and the exact running sum.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    amounts: Vec<Decimal>,
    sorted: Vec<Decimal>,
    sum: Decimal,
}

impl Bucket {
    /// Adds an amount. Returns `false`, leaving the bucket untouched, when
    /// the sum would leave the decimal range.
    fn push(&mut self, amount: Decimal) -> bool {
        let Some(sum) = self.sum.checked_add(amount) else {
            return false;
        };
        self.sum = sum;
        self.amounts.push(amount);
        let at = self.sorted.partition_point(|v| *v <= amount);
        self.sorted.insert(at, amount);
        true
    }

    /// Amounts in the order they were appended.
    pub fn amounts(&self) -> &[Decimal] {
        &self.amounts
    }

    /// Amounts in ascending order.
    pub fn sorted(&self) -> &[Decimal] {
        &self.sorted
    }

    /// Exact sum of all amounts.
    pub fn sum(&self) -> Decimal {
        self.sum
    }

    /// Number of amounts in the bucket.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Nearest-rank percentile over the current contents.
    pub fn percentile(&self, percentile: Percentile) -> Option<Decimal> {
        percentile::percentile_of_sorted(&self.sorted, percentile)
    }
}

// ============================================================================
// RecipientAggregator
// ============================================================================

type RecipientBuckets = HashMap<CommitteeId, HashMap<Year, Bucket>>;

/// Three-level container: zone, then recipient, then year, then bucket.
///
/// Levels and buckets are created lazily on the first append for a key and
/// only ever grow.
#[derive(Debug, Default)]
pub struct RecipientAggregator {
    zones: HashMap<ZipZone, RecipientBuckets>,
    buckets: usize,
}

impl RecipientAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an amount and returns the bucket it landed in.
    ///
    /// The returned bucket already includes `amount`. Fails with
    /// [`Error::SumOverflow`] if the bucket's sum would overflow; the bucket
    /// is then left as it was.
    pub fn append(
        &mut self,
        zone: &ZipZone,
        recipient: &CommitteeId,
        year: Year,
        amount: Decimal,
    ) -> Result<&Bucket> {
        let years = self
            .zones
            .entry(zone.clone())
            .or_default()
            .entry(recipient.clone())
            .or_default();
        let bucket = match years.entry(year) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.buckets += 1;
                entry.insert(Bucket::default())
            }
        };
        if !bucket.push(amount) {
            return Err(Error::SumOverflow {
                committee_id: recipient.clone(),
                zone: zone.clone(),
                year,
            });
        }
        Ok(bucket)
    }

    /// Read-only view of a bucket, if it exists.
    pub fn snapshot(&self, zone: &ZipZone, recipient: &CommitteeId, year: Year) -> Option<&Bucket> {
        self.zones.get(zone)?.get(recipient)?.get(&year)
    }

    /// Number of buckets created so far.
    pub fn bucket_count(&self) -> usize {
        self.buckets
    }
}
