//! Run configuration: the target percentile and the record layout.

use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::record::RecordLayout;

/// Highest accepted percentile.
pub const MAX_PERCENTILE: u8 = 100;

/// Target percentile for running statistics, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentile(u8);

impl Percentile {
    /// Creates a percentile, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_PERCENTILE {
            return Err(Error::config(format!(
                "percentile {value} is outside 0..=100"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the percentile as an integer in `0..=100`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Reads the percentile from the first line of a file.
    ///
    /// Only the first line is looked at; trailing whitespace (including the
    /// line terminator) is ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io_with_path(e, path))?;
        let mut first_line = String::new();
        std::io::BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|e| Error::io_with_path(e, path))?;
        first_line.parse()
    }
}

impl FromStr for Percentile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim_end();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::config(format!(
                "percentile must be a whole number, got {value:?}"
            )));
        }
        let parsed: u8 = value
            .parse()
            .map_err(|_| Error::config(format!("percentile {value} is outside 0..=100")))?;
        Self::new(parsed)
    }
}

impl TryFrom<u8> for Percentile {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Percentile> for u8 {
    fn from(p: Percentile) -> Self {
        p.0
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a pipeline run is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Target percentile for the running statistic
    pub percentile: Percentile,
    /// Where the consumed fields sit in each row
    pub layout: RecordLayout,
}

impl PipelineConfig {
    /// Creates a configuration with the default row layout.
    pub fn new(percentile: Percentile) -> Self {
        Self {
            percentile,
            layout: RecordLayout::default(),
        }
    }

    /// Replaces the row layout.
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }
}
