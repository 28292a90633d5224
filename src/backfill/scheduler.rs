use std::collections::BTreeSet;
use std::fmt::Display;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::fetcher::{DrawFetcher, FetchError};
use crate::config::DrawStatsConfig;
use crate::draw::Numbers;
use crate::store::{DrawStore, StoreError};
use crate::types::identifiers::Region;

#[derive(Debug, Error)]
pub enum BackfillError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error(
        "Window for region {region} unobtainable: {have} of {want} dates within {lookback_days} days"
    )]
    WindowUnobtainable {
        region: Region,
        have: usize,
        want: usize,
        lookback_days: u32,
        report: Box<BackfillReport>,
    },
}

/// A date the scheduler tried and gave up on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateFailure {
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_display")]
    pub error: FetchError,
}

/// What one `ensure_window` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    pub region: Region,
    pub today: NaiveDate,
    /// True when the cached window was already complete and nothing was fetched.
    pub short_circuited: bool,
    /// Dates fetched and stored by this call, newest first.
    pub fetched: Vec<NaiveDate>,
    pub failures: Vec<DateFailure>,
    /// Distinct stored dates between the walk's last day and `today`.
    pub window_dates: usize,
}

impl BackfillReport {
    fn new(region: Region, today: NaiveDate) -> Self {
        Self {
            region,
            today,
            short_circuited: false,
            fetched: Vec::new(),
            failures: Vec::new(),
            window_dates: 0,
        }
    }

    pub fn fetch_attempts(&self) -> usize {
        self.fetched.len() + self.failures.len()
    }
}

/// Keeps the most recent `draw_limit` dates of one region in the store.
///
/// BackfillScheduler is synchronous: every fetch completes (or times out)
/// before the walk moves to the previous day.
pub struct BackfillScheduler<F> {
    region: Region,
    draw_limit: usize,
    lookback_days: u32,
    fetch_timeout: Duration,
    fetcher: F,
}

impl<F> BackfillScheduler<F>
where
    F: DrawFetcher,
{
    pub fn new(config: &DrawStatsConfig, fetcher: F) -> Self {
        Self {
            region: config.region.clone(),
            draw_limit: config.draw_limit,
            lookback_days: config.lookback_days(),
            fetch_timeout: config.fetch_timeout(),
            fetcher,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Fill the window backward from `today`.
    ///
    /// Returns immediately when the newest stored draw is `today` and the
    /// window already holds `draw_limit` dates. Otherwise each unknown date,
    /// starting at `today`, is fetched once; failures are recorded and the
    /// walk continues with the previous day until `draw_limit` known dates
    /// lie between the cursor and `today`. Fails with `WindowUnobtainable`
    /// when the walk passes `lookback_days` without completing the window.
    pub fn ensure_window(
        &self,
        store: &DrawStore,
        today: NaiveDate,
    ) -> Result<BackfillReport, BackfillError> {
        let existing = store.query(&self.region, self.draw_limit)?;
        let mut report = BackfillReport::new(self.region.clone(), today);

        let newest_is_today = existing.first().is_some_and(|r| r.date == today);
        if newest_is_today && existing.len() >= self.draw_limit {
            log::info!("window for {} complete as of {today}, nothing to fetch", self.region);
            report.short_circuited = true;
            report.window_dates = existing.len();
            return Ok(report);
        }

        let mut known: BTreeSet<NaiveDate> = existing.iter().map(|r| r.date).collect();
        log::info!(
            "backfilling {}: {} of {} dates cached",
            self.region,
            known.len(),
            self.draw_limit
        );

        let mut day = today;
        loop {
            if (today - day).num_days() >= i64::from(self.lookback_days) {
                let have = known.range(day..=today).count();
                return Err(self.unobtainable(have, report));
            }

            if !known.contains(&day) {
                match self.fetch_numbers(day) {
                    Ok(numbers) => {
                        store.insert(&self.region, day, &numbers)?;
                        known.insert(day);
                        report.fetched.push(day);
                    }
                    Err(error) => {
                        log::warn!("fetch failed for {}/{day}: {error}", self.region);
                        report.failures.push(DateFailure { date: day, error });
                    }
                }
            }

            // Only dates between the cursor and today count, so a stale
            // cache never stands in for newer days that were skipped.
            let window_dates = known.range(day..=today).count();
            if window_dates >= self.draw_limit {
                report.window_dates = window_dates;
                break;
            }
            day = match day.pred_opt() {
                Some(prev) => prev,
                None => return Err(self.unobtainable(window_dates, report)),
            };
        }

        log::info!(
            "backfill for {} complete: {} fetched, {} failed",
            self.region,
            report.fetched.len(),
            report.failures.len()
        );
        Ok(report)
    }

    fn fetch_numbers(&self, date: NaiveDate) -> Result<Numbers, FetchError> {
        let fetched = self.fetcher.fetch(&self.region, date, self.fetch_timeout)?;
        if fetched.date != date {
            return Err(FetchError::DateMismatch {
                requested: date,
                returned: fetched.date,
            });
        }
        Ok(Numbers::parse(&fetched.numbers)?)
    }

    fn unobtainable(&self, have: usize, mut report: BackfillReport) -> BackfillError {
        report.window_dates = have;
        log::warn!(
            "window for {} incomplete: {have} of {} dates within {} days",
            self.region,
            self.draw_limit,
            self.lookback_days
        );
        BackfillError::WindowUnobtainable {
            region: self.region.clone(),
            have,
            want: self.draw_limit,
            lookback_days: self.lookback_days,
            report: Box::new(report),
        }
    }
}

fn serialize_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
