use chrono::{Datelike, Local, NaiveDate};

use crate::analysis::{station_picks, suggest, window_version, Aggregator, LastTwoDigits};
use crate::backfill::{BackfillError, BackfillReport, BackfillScheduler, DrawFetcher};
use crate::config::{ConfigError, DrawStatsConfig};
use crate::schedule::StationSchedule;
use crate::store::{DrawStore, StoreError};
use crate::types::advice::{Advice, AdviceError};

/// Request boundary: ensure the window, read it, aggregate, suggest.
///
/// Every failure comes back as an [`AdviceError`]; nothing panics on bad data
/// or a missing schedule.
pub struct Advisor<F, A = LastTwoDigits> {
    config: DrawStatsConfig,
    store: DrawStore,
    scheduler: BackfillScheduler<F>,
    schedule: StationSchedule,
    aggregator: A,
}

impl<F> Advisor<F, LastTwoDigits>
where
    F: DrawFetcher,
{
    pub fn new(config: DrawStatsConfig, store: DrawStore, fetcher: F) -> Result<Self, ConfigError> {
        Self::with_aggregator(config, store, fetcher, LastTwoDigits)
    }

    /// Open the store named by `config.store` and build an advisor on it.
    pub fn open(config: DrawStatsConfig, fetcher: F) -> Result<Self, OpenError> {
        let store = DrawStore::open(&config.store)?;
        Ok(Self::new(config, store, fetcher)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<F, A> Advisor<F, A>
where
    F: DrawFetcher,
    A: Aggregator,
{
    pub fn with_aggregator(
        config: DrawStatsConfig,
        store: DrawStore,
        fetcher: F,
        aggregator: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheduler = BackfillScheduler::new(&config, fetcher);
        Ok(Self {
            config,
            store,
            scheduler,
            schedule: StationSchedule::southern(),
            aggregator,
        })
    }

    pub fn with_schedule(mut self, schedule: StationSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn config(&self) -> &DrawStatsConfig {
        &self.config
    }

    pub fn store(&self) -> &DrawStore {
        &self.store
    }

    pub fn scheduler(&self) -> &BackfillScheduler<F> {
        &self.scheduler
    }

    /// Advice for the local calendar date.
    pub fn advise(&self) -> Result<Advice, AdviceError> {
        self.advise_on(Local::now().date_naive())
    }

    pub fn advise_on(&self, today: NaiveDate) -> Result<Advice, AdviceError> {
        // An incomplete window still gets analysed; only an empty one is fatal.
        let backfill = match self.scheduler.ensure_window(&self.store, today) {
            Ok(report) => report,
            Err(BackfillError::WindowUnobtainable { report, .. }) => *report,
            Err(BackfillError::Store(err)) => return Err(err.into()),
        };
        self.analyse(today, Some(backfill))
    }

    /// Advice from whatever is already cached, without fetching.
    pub fn advise_cached(&self) -> Result<Advice, AdviceError> {
        self.advise_cached_on(Local::now().date_naive())
    }

    pub fn advise_cached_on(&self, today: NaiveDate) -> Result<Advice, AdviceError> {
        self.analyse(today, None)
    }

    fn analyse(
        &self,
        today: NaiveDate,
        backfill: Option<BackfillReport>,
    ) -> Result<Advice, AdviceError> {
        let region = &self.config.region;

        let draws = self.store.query(region, self.config.draw_limit)?;
        if draws.is_empty() {
            let last_failure = backfill.as_ref().and_then(|r| r.failures.last().map(|f| (r, f)));
            return Err(match last_failure {
                Some((report, last)) => AdviceError::FetchFailed {
                    region: region.clone(),
                    failures: report.failures.len(),
                    last_error: last.error.to_string(),
                },
                None => AdviceError::NoData {
                    region: region.clone(),
                },
            });
        }

        let table = self.aggregator.aggregate(&draws);
        let suggestion = suggest(&table);

        let weekday = today.weekday();
        let stations = self
            .schedule
            .stations_for(weekday)
            .ok_or_else(|| AdviceError::ConfigMissing(format!("no stations scheduled for {weekday}")))?
            .to_vec();
        let station_picks = station_picks(&suggestion.primary, &stations);

        Ok(Advice {
            region: region.clone(),
            date: today,
            weekday,
            stations,
            draws_considered: draws.len(),
            window_version: window_version(&draws),
            suggestion,
            station_picks,
            backfill,
        })
    }
}
