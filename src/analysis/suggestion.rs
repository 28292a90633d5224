use super::frequency::FrequencyTable;
use crate::types::advice::{StationPick, SuggestionSet};
use crate::types::identifiers::DigitKey;

pub const PRIMARY_SIZE: usize = 8;
pub const MAX_PAIRS: usize = 8;
pub const TRIPLE_SIZE: usize = 3;

pub fn suggest(table: &FrequencyTable) -> SuggestionSet {
    let primary: Vec<DigitKey> = table
        .ranked()
        .into_iter()
        .take(PRIMARY_SIZE)
        .map(|(key, _)| key)
        .collect();

    // Fixed truncation in (i, j) index order, not a ranking of pairs.
    let pairs = primary
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| primary[i + 1..].iter().map(move |&b| (a, b)))
        .take(MAX_PAIRS)
        .collect();

    let triples = primary
        .chunks_exact(TRIPLE_SIZE)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    SuggestionSet {
        primary,
        pairs,
        triples,
    }
}

/// Deal `primary` across stations by stride: station `i` of `n` gets
/// `primary[i]`, `primary[i + n]`, ...
pub fn station_picks(primary: &[DigitKey], stations: &[String]) -> Vec<StationPick> {
    let n = stations.len();
    stations
        .iter()
        .enumerate()
        .map(|(i, station)| StationPick {
            station: station.clone(),
            numbers: primary.iter().skip(i).step_by(n).copied().collect(),
        })
        .collect()
}
