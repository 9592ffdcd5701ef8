//! Numeric TMDB resource identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Reasons a raw identifier is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// Nothing was supplied.
    #[error("identifier must not be empty")]
    Empty,
    /// The value is not a plain base-10 integer.
    #[error("identifier must be a positive integer")]
    NotNumeric,
    /// The value is zero.
    #[error("identifier must be greater than zero")]
    NotPositive,
}

/// Positive integer identifying a movie, show, person, company, network or
/// list on TMDB.
///
/// Parsing accepts only ASCII digits, so signs, fractions, exponents and
/// whitespace are all rejected.
///
/// # Examples
/// ```
/// use moviebox::domain::TmdbId;
///
/// assert_eq!(TmdbId::parse("550").map(TmdbId::get), Ok(550));
/// assert!(TmdbId::parse("0").is_err());
/// assert!(TmdbId::parse("-5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TmdbId(u64);

impl TmdbId {
    /// Parse a raw path or body value.
    pub fn parse(raw: &str) -> Result<Self, IdValidationError> {
        if raw.is_empty() {
            return Err(IdValidationError::Empty);
        }
        if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(IdValidationError::NotNumeric);
        }
        let value = raw
            .parse::<u64>()
            .map_err(|_| IdValidationError::NotNumeric)?;
        Self::new(value)
    }

    /// Wrap an already numeric value.
    pub const fn new(value: u64) -> Result<Self, IdValidationError> {
        if value == 0 {
            return Err(IdValidationError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Underlying integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TmdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TmdbId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for TmdbId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
