//! Contribution records and the row layout they are read from.
//!
//! Input rows are delimiter-separated with fields consumed by position. The
//! [`RecordLayout`] names those positions; [`ContributionRecord::from_fields`]
//! validates one row and either builds a typed record or says why the row was
//! dropped.

use chrono::{Datelike, NaiveDate};
use csv::ByteRecord;
use rust_decimal::Decimal;

use crate::types::{CommitteeId, DonorName, Year, ZipZone};
use crate::validate::{self, FieldKind};

/// Positions of the consumed fields within a row, plus the delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// Field separator byte
    pub delimiter: u8,
    /// Position of the recipient committee id
    pub committee_id: usize,
    /// Position of the donor name
    pub name: usize,
    /// Position of the donor postal code
    pub postal_code: usize,
    /// Position of the `MMDDYYYY` transaction date
    pub transaction_date: usize,
    /// Position of the transaction amount
    pub transaction_amount: usize,
    /// Position of the field that must be empty
    pub other_id: usize,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            committee_id: 0,
            name: 7,
            postal_code: 10,
            transaction_date: 13,
            transaction_amount: 14,
            other_id: 15,
        }
    }
}

impl RecordLayout {
    /// Position of the field holding `kind`.
    pub fn position(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::CommitteeId => self.committee_id,
            FieldKind::Name => self.name,
            FieldKind::PostalCode => self.postal_code,
            FieldKind::TransactionDate => self.transaction_date,
            FieldKind::TransactionAmount => self.transaction_amount,
            FieldKind::OtherId => self.other_id,
        }
    }

    /// Minimum number of fields a row needs for positional extraction.
    pub fn required_fields(&self) -> usize {
        FieldKind::ALL
            .iter()
            .map(|kind| self.position(*kind))
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The row is too short to hold every consumed position.
    #[error("row has {found} fields, {required} required")]
    TooFewFields {
        /// Fields present in the row
        found: usize,
        /// Fields the layout needs
        required: usize,
    },

    /// A checked field failed its predicate.
    #[error("invalid {0}")]
    InvalidField(FieldKind),
}

/// A validated individual contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRecord {
    /// Recipient committee
    pub committee_id: CommitteeId,
    /// Donor name, byte for byte as written in the row
    pub donor_name: DonorName,
    /// Donor postal zone (first five postal-code digits)
    pub zone: ZipZone,
    /// Transaction date
    pub transaction_date: NaiveDate,
    /// Transaction year, taken from the date
    pub year: Year,
    /// Transaction amount, exact
    pub amount: Decimal,
}

impl ContributionRecord {
    /// Validates one row and builds a record from it.
    ///
    /// Fields are checked on their lossy UTF-8 decoding; the donor name is
    /// kept as raw bytes. Every checked field must pass; the first failure
    /// (in [`FieldKind::ALL`] order) is reported.
    pub fn from_fields(fields: &ByteRecord, layout: &RecordLayout) -> Result<Self, Rejection> {
        let required = layout.required_fields();
        if fields.len() < required {
            return Err(Rejection::TooFewFields {
                found: fields.len(),
                required,
            });
        }

        let raw = |kind: FieldKind| fields.get(layout.position(kind)).unwrap_or_default();
        let field = |kind: FieldKind| String::from_utf8_lossy(raw(kind));

        if let Some(kind) = FieldKind::ALL
            .into_iter()
            .find(|kind| !kind.accepts(&field(*kind)))
        {
            return Err(Rejection::InvalidField(kind));
        }

        let invalid = Rejection::InvalidField;
        let transaction_date = validate::parse_date(&field(FieldKind::TransactionDate))
            .ok_or(invalid(FieldKind::TransactionDate))?;
        let year = Year::try_from(transaction_date.year())
            .map_err(|_| invalid(FieldKind::TransactionDate))?;
        let amount = validate::parse_amount(&field(FieldKind::TransactionAmount))
            .ok_or(invalid(FieldKind::TransactionAmount))?;

        Ok(Self {
            committee_id: CommitteeId::new(field(FieldKind::CommitteeId)),
            donor_name: DonorName::from_bytes(raw(FieldKind::Name)),
            zone: ZipZone::from_postal_code(&field(FieldKind::PostalCode)),
            transaction_date,
            year,
            amount,
        })
    }
}
