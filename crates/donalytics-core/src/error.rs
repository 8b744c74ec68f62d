//! Error types for the donalytics core library.

use std::path::{Path, PathBuf};

use crate::types::{CommitteeId, Year, ZipZone};

/// Errors that abort a donalytics run.
///
/// Malformed input rows are not errors; they are reported as a
/// [`Rejection`](crate::Rejection) and the run carries on. Everything here is
/// fatal for the run that hit it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error (bad percentile file contents, bad layout, ...)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error tied to a specific file
    #[error("I/O error on {}: {source}", .path.display())]
    IoPath {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error on an already open stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bucket's running sum no longer fits the exact decimal range
    #[error("Running sum overflowed for {committee_id}|{zone}|{year}")]
    SumOverflow {
        /// Recipient of the bucket
        committee_id: CommitteeId,
        /// Zip zone of the bucket
        zone: ZipZone,
        /// Calendar year of the bucket
        year: Year,
    },

    /// Failure while reading delimited rows
    #[error("Record stream error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience `Result` type alias for donalytics operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` for configuration errors.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}
