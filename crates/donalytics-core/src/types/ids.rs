//! Identifier types for recipients and postal zones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading postal-code characters that make up a zone.
pub const ZONE_LEN: usize = 5;

/// Identifier of the committee receiving a contribution.
///
/// Committee ids are nine alphanumeric characters like `C00384516`. The type
/// itself does not check the shape; rows are validated before an id is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommitteeId(String);

impl CommitteeId {
    /// Creates a committee id from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use donalytics_core::CommitteeId;
    ///
    /// let id = CommitteeId::new("C00384516");
    /// assert_eq!(id.as_str(), "C00384516");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the committee id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommitteeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CommitteeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Donor name exactly as it appeared in the row.
///
/// Held as raw bytes so that two names differing only in bytes that are not
/// valid UTF-8 stay distinct donors. Displays lossily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DonorName(Vec<u8>);

impl DonorName {
    /// Creates a donor name from raw field bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes of the name.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DonorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for DonorName {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

/// Five-character postal zone a donor or recipient bucket is scoped to.
///
/// Built by truncating a longer postal code (`22182-0001` style ZIP+4 codes
/// arrive as `221820001`) to its first [`ZONE_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZipZone(String);

impl ZipZone {
    /// Derives the zone from a full postal code.
    ///
    /// Codes shorter than [`ZONE_LEN`] are kept whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use donalytics_core::ZipZone;
    ///
    /// assert_eq!(ZipZone::from_postal_code("221820001").as_str(), "22182");
    /// assert_eq!(ZipZone::from_postal_code("02895").as_str(), "02895");
    /// ```
    pub fn from_postal_code(code: &str) -> Self {
        Self(code.chars().take(ZONE_LEN).collect())
    }

    /// Returns the zone as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ZipZone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
