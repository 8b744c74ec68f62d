//! Per-field validation for raw contribution fields.
//!
//! Every predicate here is pure: it takes the raw text of one field and
//! answers pass or fail. A row is accepted only when all six checked fields
//! pass; see [`ContributionRecord::from_fields`](crate::ContributionRecord::from_fields).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Exact length of a committee identifier.
pub const COMMITTEE_ID_LEN: usize = 9;

/// Longest accepted donor name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Shortest accepted postal code.
pub const MIN_POSTAL_LEN: usize = 5;

/// Longest accepted postal code.
pub const MAX_POSTAL_LEN: usize = 9;

/// Length of a packed `MMDDYYYY` transaction date.
pub const DATE_LEN: usize = 8;

// ============================================================================
// FieldKind
// ============================================================================

/// The semantic role of a checked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Recipient committee identifier.
    CommitteeId,
    /// Donor name.
    Name,
    /// Donor postal code (5 to 9 digits).
    PostalCode,
    /// Transaction date, `MMDDYYYY`.
    TransactionDate,
    /// Transaction amount.
    TransactionAmount,
    /// Field that must be empty for an individual contribution.
    OtherId,
}

impl FieldKind {
    /// All checked kinds, in the order rows are validated.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::TransactionDate,
        FieldKind::PostalCode,
        FieldKind::Name,
        FieldKind::CommitteeId,
        FieldKind::TransactionAmount,
        FieldKind::OtherId,
    ];

    /// Checks `value` against the predicate for this kind.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FieldKind::CommitteeId => is_valid_committee_id(value),
            FieldKind::Name => is_valid_name(value),
            FieldKind::PostalCode => is_valid_postal_code(value),
            FieldKind::TransactionDate => is_valid_date(value),
            FieldKind::TransactionAmount => is_valid_amount(value),
            FieldKind::OtherId => is_valid_other_id(value),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::CommitteeId => write!(f, "CMTE_ID"),
            FieldKind::Name => write!(f, "NAME"),
            FieldKind::PostalCode => write!(f, "ZIP_CODE"),
            FieldKind::TransactionDate => write!(f, "TRANSACTION_DT"),
            FieldKind::TransactionAmount => write!(f, "TRANSACTION_AMT"),
            FieldKind::OtherId => write!(f, "OTHER_ID"),
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Committee id: exactly nine characters, all alphanumeric.
pub fn is_valid_committee_id(value: &str) -> bool {
    value.chars().count() == COMMITTEE_ID_LEN && value.chars().all(char::is_alphanumeric)
}

/// Donor name: non-empty and at most [`MAX_NAME_LEN`] characters.
pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty() && value.chars().count() <= MAX_NAME_LEN
}

/// Postal code: only ASCII digits, 5 to 9 of them.
pub fn is_valid_postal_code(value: &str) -> bool {
    (MIN_POSTAL_LEN..=MAX_POSTAL_LEN).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}

/// Transaction date: eight digits forming a real `MMDDYYYY` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Transaction amount: a non-negative decimal number.
pub fn is_valid_amount(value: &str) -> bool {
    parse_amount(value).is_some()
}

/// Other id: must be empty for an individual contribution.
pub fn is_valid_other_id(value: &str) -> bool {
    value.is_empty()
}

// ============================================================================
// Parsers shared with record construction
// ============================================================================

/// Parses a packed `MMDDYYYY` date.
///
/// Returns `None` for anything that is not eight ASCII digits, for year
/// `0000`, and for impossible dates such as `02302017` or `13012017`.
///
/// # Examples
///
/// ```
/// use donalytics_core::validate::parse_date;
///
/// assert!(parse_date("01312017").is_some());
/// assert!(parse_date("02292017").is_none());
/// assert!(parse_date("1312017").is_none());
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != DATE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u32 = value[0..2].parse().ok()?;
    let day: u32 = value[2..4].parse().ok()?;
    let year: i32 = value[4..8].parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a transaction amount.
///
/// The amount is kept as an exact decimal, so large integers and cents
/// survive unchanged. Surrounding whitespace is ignored. Negative,
/// non-numeric and empty values yield `None`, as do values beyond the
/// 96-bit decimal range.
///
/// # Examples
///
/// ```
/// use donalytics_core::validate::parse_amount;
///
/// assert_eq!(parse_amount("9007199254740993").unwrap().to_string(), "9007199254740993");
/// assert!(parse_amount("-1").is_none());
/// ```
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let amount = Decimal::from_str(trimmed).ok()?;
    (amount >= Decimal::ZERO).then_some(amount)
}
