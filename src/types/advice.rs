use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::backfill::BackfillReport;
use crate::store::StoreError;
use crate::types::identifiers::{DigitKey, Region};

/// Ranked output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    /// Highest frequency first, ties by ascending key.
    pub primary: Vec<DigitKey>,
    /// `(primary[i], primary[j])` for `i < j`, first combinations only.
    pub pairs: Vec<(DigitKey, DigitKey)>,
    /// Consecutive, non-overlapping groups of `primary`.
    pub triples: Vec<[DigitKey; 3]>,
}

/// The share of `primary` assigned to one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationPick {
    pub station: String,
    pub numbers: Vec<DigitKey>,
}

/// Everything a presentation layer needs to report today's suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub region: Region,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub stations: Vec<String>,
    pub draws_considered: usize,
    /// Content hash of the analysed window, `sha256:<hex>`.
    pub window_version: String,
    pub suggestion: SuggestionSet,
    pub station_picks: Vec<StationPick>,
    /// `None` when the advice was computed from the cache alone.
    pub backfill: Option<BackfillReport>,
}

/// Failure of a whole advice request. `Display` is the user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("No draw data available for region {region}")]
    NoData { region: Region },

    #[error("No draw data for region {region}: {failures} fetch attempts failed, last error: {last_error}")]
    FetchFailed {
        region: Region,
        failures: usize,
        last_error: String,
    },

    #[error("Configuration missing: {0}")]
    ConfigMissing(String),

    #[error("Draw store unavailable: {0}")]
    Store(#[from] StoreError),
}
