use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::Region;

pub const DEFAULT_DRAW_LIMIT: usize = 40;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_DB_PATH: &str = "lotobot.db";
/// Default lookback is this many times the window size.
pub const LOOKBACK_FACTOR: u32 = 3;

pub const ENV_REGION: &str = "DRAW_STATS_REGION";
pub const ENV_DRAW_LIMIT: &str = "DRAW_STATS_DRAW_LIMIT";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "DRAW_STATS_FETCH_TIMEOUT_SECS";
pub const ENV_MAX_LOOKBACK_DAYS: &str = "DRAW_STATS_MAX_LOOKBACK_DAYS";
pub const ENV_DB_PATH: &str = "DRAW_STATS_DB_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("draw_limit must be at least 1")]
    ZeroDrawLimit,
    #[error("max_lookback_days ({lookback}) is shorter than draw_limit ({draw_limit})")]
    LookbackTooShort { lookback: u32, draw_limit: usize },
}

// Key point:
// Serializable
// Explicit defaults
// Passed in, never global
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStatsConfig {
    pub region: Region,
    /// Number of distinct draw dates the window must hold.
    pub draw_limit: usize,
    /// Upper bound handed to the fetcher for a single date.
    pub fetch_timeout_secs: u64,
    /// Calendar days the backfill may walk back from today.
    /// `None` means `LOOKBACK_FACTOR * draw_limit`.
    pub max_lookback_days: Option<u32>,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl Default for DrawStatsConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            draw_limit: DEFAULT_DRAW_LIMIT,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_lookback_days: None,
            store: StoreConfig::default(),
        }
    }
}

impl DrawStatsConfig {
    /// Read a JSON config file. Absent fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path)?;
        let config: Self = serde_json::from_reader(f)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `DRAW_STATS_*` environment variables on the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_REGION) {
            config.region = Region::new(&raw).map_err(|_| ConfigError::InvalidValue {
                key: ENV_REGION,
                value: raw,
            })?;
        }
        if let Some(raw) = lookup(ENV_DRAW_LIMIT) {
            config.draw_limit = parse_value(ENV_DRAW_LIMIT, raw)?;
        }
        if let Some(raw) = lookup(ENV_FETCH_TIMEOUT_SECS) {
            config.fetch_timeout_secs = parse_value(ENV_FETCH_TIMEOUT_SECS, raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_LOOKBACK_DAYS) {
            config.max_lookback_days = Some(parse_value(ENV_MAX_LOOKBACK_DAYS, raw)?);
        }
        if let Some(raw) = lookup(ENV_DB_PATH) {
            config.store.path = PathBuf::from(raw);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_limit == 0 {
            return Err(ConfigError::ZeroDrawLimit);
        }
        let lookback = self.lookback_days();
        if (lookback as usize) < self.draw_limit {
            return Err(ConfigError::LookbackTooShort {
                lookback,
                draw_limit: self.draw_limit,
            });
        }
        Ok(())
    }

    pub fn lookback_days(&self) -> u32 {
        self.max_lookback_days.unwrap_or_else(|| {
            u32::try_from(self.draw_limit)
                .unwrap_or(u32::MAX)
                .saturating_mul(LOOKBACK_FACTOR)
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_draw_limit(mut self, draw_limit: usize) -> Self {
        self.draw_limit = draw_limit;
        self
    }

    pub fn with_max_lookback_days(mut self, days: u32) -> Self {
        self.max_lookback_days = Some(days);
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.path = path.into();
        self
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}
