//! Deterministic draw-result cache and frequency suggestions.
//!
//! `draw-stats` keeps a local SQLite cache of daily lottery draws, backfills
//! the most recent window of dates on demand through a caller-supplied
//! fetcher, and reduces that window into a ranked suggestion set of two-digit
//! endings. Ranking is deterministic: identical windows always produce
//! identical suggestions, in identical order.

pub mod advisor;
pub mod analysis;
pub mod backfill;
pub mod config;
pub mod draw;
pub mod schedule;
pub mod store;
pub mod types;

pub use advisor::{Advisor, OpenError};
pub use config::{ConfigError, DrawStatsConfig, StoreConfig};
