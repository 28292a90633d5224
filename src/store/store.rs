// Append-only by construction:
// insert-or-ignore, never update
// no delete
// every read is bounded by a caller limit

use std::time::Duration;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use thiserror::Error;

use super::schema::{COUNT_REGION, CREATE_RESULTS, DATE_FORMAT, INSERT_OR_IGNORE, SELECT_RECENT};
use crate::config::StoreConfig;
use crate::draw::{DrawRecord, Numbers};
use crate::types::identifiers::Region;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Stored date is not ISO-8601: {raw:?}")]
    CorruptDate { raw: String },
}

/// Durable `(region, date) -> numbers` table.
///
/// DrawStore is single-connection and not meant to be shared across threads.
#[derive(Debug)]
pub struct DrawStore {
    conn: Connection,
}

impl DrawStore {
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let conn = Connection::open(&config.path)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(CREATE_RESULTS)?;
        Ok(Self { conn })
    }

    /// Insert-or-ignore. Returns `false` when `(region, date)` already existed,
    /// in which case the stored numbers are left untouched.
    pub fn insert(
        &self,
        region: &Region,
        date: NaiveDate,
        numbers: &Numbers,
    ) -> Result<bool, StoreError> {
        let date_str = date.format(DATE_FORMAT).to_string();
        let changed = self.conn.execute(
            INSERT_OR_IGNORE,
            params![region.as_str(), date_str, numbers.as_str()],
        )?;
        if changed == 0 {
            log::debug!("draw {region}/{date_str} already stored, insert ignored");
        }
        Ok(changed > 0)
    }

    /// Up to `limit` most recent draws for `region`, newest first.
    ///
    /// Insufficient history yields a short or empty vector, not an error.
    pub fn query(&self, region: &Region, limit: usize) -> Result<Vec<DrawRecord>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare_cached(SELECT_RECENT)?;
        let rows = stmt.query_map(params![region.as_str(), limit], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (raw_date, raw_numbers) = row?;
            let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
                .map_err(|_| StoreError::CorruptDate { raw: raw_date.clone() })?;
            records.push(DrawRecord::new(
                region.clone(),
                date,
                Numbers::from_stored(raw_numbers),
            ));
        }
        Ok(records)
    }

    /// Total stored draws for `region`, regardless of any window.
    pub fn count(&self, region: &Region) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row(COUNT_REGION, params![region.as_str()], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}
