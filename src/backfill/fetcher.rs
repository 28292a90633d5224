use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::draw::NumbersError;
use crate::types::identifiers::Region;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),
    #[error("Network error: {0}")]
    Network(String),
    #[error("No results published for {0}")]
    NotPublished(NaiveDate),
    #[error("Invalid numbers: {0}")]
    InvalidNumbers(#[from] NumbersError),
    #[error("Requested {requested}, fetcher returned {returned}")]
    DateMismatch {
        requested: NaiveDate,
        returned: NaiveDate,
    },
}

/// Raw result for one draw date, as handed over by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDraw {
    pub date: NaiveDate,
    /// Comma-joined prize numbers, validated by the scheduler before storage.
    pub numbers: String,
}

impl FetchedDraw {
    pub fn new(date: NaiveDate, numbers: impl Into<String>) -> Self {
        Self {
            date,
            numbers: numbers.into(),
        }
    }
}

/// Source of draw results for a single date.
///
/// Implementations own the transport and page parsing. They must give up
/// after `timeout` and report [`FetchError::Timeout`]; the scheduler treats
/// every error the same way and moves on to the previous day.
pub trait DrawFetcher {
    fn fetch(
        &self,
        region: &Region,
        date: NaiveDate,
        timeout: Duration,
    ) -> Result<FetchedDraw, FetchError>;
}

impl<F> DrawFetcher for F
where
    F: Fn(&Region, NaiveDate, Duration) -> Result<FetchedDraw, FetchError>,
{
    fn fetch(
        &self,
        region: &Region,
        date: NaiveDate,
        timeout: Duration,
    ) -> Result<FetchedDraw, FetchError> {
        self(region, date, timeout)
    }
}
