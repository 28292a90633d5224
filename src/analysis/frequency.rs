use std::cmp::Ordering;

use crate::draw::DrawRecord;
use crate::types::identifiers::DigitKey;

/// Occurrence count for each of the 100 two-digit buckets.
///
/// Every key is always present; an unseen ending has count 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; DigitKey::COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            counts: [0; DigitKey::COUNT],
        }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: DigitKey) {
        self.counts[key.index()] += 1;
    }

    pub fn get(&self, key: DigitKey) -> u32 {
        self.counts[key.index()]
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing has been counted. The table itself always holds 100 keys.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// All entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (DigitKey, u32)> + '_ {
        DigitKey::all().map(move |key| (key, self.get(key)))
    }

    /// All entries sorted by (count desc, key asc).
    pub fn ranked(&self) -> Vec<(DigitKey, u32)> {
        let mut entries: Vec<(DigitKey, u32)> = self.iter().collect();
        entries.sort_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });

        debug_assert!(entries
            .windows(2)
            .all(|w| w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0 < w[1].0)));

        entries
    }
}

pub trait Aggregator {
    fn aggregate(&self, draws: &[DrawRecord]) -> FrequencyTable;
}

/// v0: count the last two digits of every prize number in the window.
///
/// Main and consolation prizes count alike; there is no per-station split.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastTwoDigits;

impl Aggregator for LastTwoDigits {
    fn aggregate(&self, draws: &[DrawRecord]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for draw in draws {
            for token in draw.numbers.tokens() {
                match DigitKey::from_token_suffix(token) {
                    Some(key) => table.increment(key),
                    None => log::debug!("skipping token {token:?} in draw {}", draw.date),
                }
            }
        }
        table
    }
}
