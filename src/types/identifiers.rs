use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Region code must not be empty")]
    EmptyRegion,
    #[error("Not a two-digit key: {0:?}")]
    InvalidDigitKey(String),
}

/// Region code a draw belongs to, e.g. `mn`.
///
/// Normalized to trimmed lowercase so `"MN"` and `" mn "` address the same rows.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    pub fn new(code: impl AsRef<str>) -> Result<Self, IdentifierError> {
        let normalized = code.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(IdentifierError::EmptyRegion);
        }
        Ok(Region(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Region("mn".into())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Region::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

/// One of the 100 frequency buckets, `"00"` through `"99"`.
///
/// Ordering is numeric, which is also the ascending string order of the
/// zero-padded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitKey(u8);

impl DigitKey {
    pub const COUNT: usize = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value < 100).then_some(DigitKey(value))
    }

    /// Bucket for the last two characters of a numeric token.
    ///
    /// `None` when the token is shorter than two characters or does not end in
    /// two ASCII digits.
    pub fn from_token_suffix(token: &str) -> Option<Self> {
        let mut tail = token.chars().rev();
        let ones = tail.next()?.to_digit(10)?;
        let tens = tail.next()?.to_digit(10)?;
        Some(DigitKey((tens * 10 + ones) as u8))
    }

    /// All keys in ascending order.
    pub fn all() -> impl Iterator<Item = DigitKey> {
        (0..Self::COUNT as u8).map(DigitKey)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DigitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::str::FromStr for DigitKey {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IdentifierError::InvalidDigitKey(s.to_string());
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<u8>().map(DigitKey).map_err(|_| invalid())
    }
}

impl TryFrom<String> for DigitKey {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigitKey> for String {
    fn from(key: DigitKey) -> Self {
        key.to_string()
    }
}
