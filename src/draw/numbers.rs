use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest and longest prize number accepted from a fetcher.
pub const MIN_TOKEN_DIGITS: usize = 2;
pub const MAX_TOKEN_DIGITS: usize = 6;

const DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumbersError {
    #[error("Draw contains no numbers")]
    Empty,
    #[error("Invalid prize number {0:?}: expected 2-6 digits")]
    InvalidToken(String),
}

/// The prize numbers of one draw, kept in their comma-joined wire form.
///
/// The store treats this as an opaque string. Only the aggregator looks
/// inside, through [`Numbers::tokens`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numbers(String);

impl Numbers {
    /// Validate a comma-joined list as produced by a fetcher.
    ///
    /// Surrounding whitespace on each token is dropped.
    pub fn parse(raw: &str) -> Result<Self, NumbersError> {
        let tokens: Vec<&str> = raw
            .split(DELIMITER)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        Self::from_tokens(tokens)
    }

    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, NumbersError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for token in tokens {
            let token = token.as_ref();
            let digits_ok = (MIN_TOKEN_DIGITS..=MAX_TOKEN_DIGITS).contains(&token.len())
                && token.bytes().all(|b| b.is_ascii_digit());
            if !digits_ok {
                return Err(NumbersError::InvalidToken(token.to_string()));
            }
            if !joined.is_empty() {
                joined.push(DELIMITER);
            }
            joined.push_str(token);
        }
        if joined.is_empty() {
            return Err(NumbersError::Empty);
        }
        Ok(Numbers(joined))
    }

    /// Wrap a value read back from storage without re-validating it.
    pub(crate) fn from_stored(raw: String) -> Self {
        Numbers(raw)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(DELIMITER).filter(|t| !t.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
