use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a study plan in days, always within `Days::MIN..=Days::MAX`.
///
/// Every constructor clamps, including deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "i64")]
pub struct Days(u8);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DaysError {
    #[error("duration must be a whole number of days, got {raw:?}")]
    NotANumber { raw: String },
}

impl Days {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 30;
    pub const DEFAULT: u8 = 7;

    /// Clamp any integer into the supported range.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        let value = raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // In range after the clamp above.
        Self(u8::try_from(value).unwrap_or(Self::DEFAULT))
    }

    /// Parse raw slider input; numeric values are clamped.
    ///
    /// # Errors
    ///
    /// Returns `DaysError::NotANumber` when the input is not an integer.
    pub fn parse(raw: &str) -> Result<Self, DaysError> {
        let trimmed = raw.trim();
        let parsed = trimmed
            .parse::<i64>()
            .or_else(|_| trimmed.parse::<f64>().map(|value| value.round() as i64))
            .map_err(|_| DaysError::NotANumber {
                raw: raw.to_string(),
            })?;
        Ok(Self::clamped(parsed))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Singular or plural unit for display next to the value.
    #[must_use]
    pub fn unit_label(self) -> &'static str {
        if self.0 == 1 { "day" } else { "days" }
    }
}

impl Default for Days {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for Days {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl From<Days> for u8 {
    fn from(days: Days) -> Self {
        days.0
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
