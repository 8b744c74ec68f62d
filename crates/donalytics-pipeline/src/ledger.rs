//! Donor ledger: the first year each donor was seen in each postal zone.
//!
//! The ledger is forward-only over arrival order. The year stored for a
//! `(zone, name)` key is the one from the first accepted row carrying that
//! key and is never revised, so a later row is a repeat only when its year
//! is strictly after that first year.

use std::collections::HashMap;

use donalytics_core::{DonorName, Year, ZipZone};

/// How a row relates to what the ledger already holds for its donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerVerdict {
    /// The donor was unknown; their year has now been recorded.
    FirstSeen,
    /// The donor gave in an earlier year than this row's.
    Repeat,
    /// The donor is known but this row's year is not after their first year.
    Stale,
}

impl LedgerVerdict {
    /// Returns `true` for [`LedgerVerdict::Repeat`].
    pub fn is_repeat(self) -> bool {
        matches!(self, LedgerVerdict::Repeat)
    }
}

/// Mapping from `(zone, donor name)` to the first year observed.
#[derive(Debug, Default)]
pub struct DonorLedger {
    zones: HashMap<ZipZone, HashMap<DonorName, Year>>,
    donors: usize,
}

impl DonorLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a donation and records the donor if unseen.
    ///
    /// This is the only mutation path: an entry is inserted once, on
    /// [`LedgerVerdict::FirstSeen`], and left untouched afterwards. Names are
    /// compared byte for byte.
    pub fn classify(&mut self, zone: &ZipZone, name: &DonorName, year: Year) -> LedgerVerdict {
        let names = self.zones.entry(zone.clone()).or_default();
        match names.get(name) {
            None => {
                names.insert(name.clone(), year);
                self.donors += 1;
                LedgerVerdict::FirstSeen
            }
            Some(&first) if first < year => LedgerVerdict::Repeat,
            Some(_) => LedgerVerdict::Stale,
        }
    }

    /// The year recorded when the donor was first seen, if ever.
    pub fn first_year(&self, zone: &ZipZone, name: &DonorName) -> Option<Year> {
        self.zones.get(zone)?.get(name).copied()
    }

    /// Number of distinct `(zone, name)` donors recorded.
    pub fn len(&self) -> usize {
        self.donors
    }

    /// Returns `true` if no donor has been recorded.
    pub fn is_empty(&self) -> bool {
        self.donors == 0
    }
}
