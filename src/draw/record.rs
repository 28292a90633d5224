use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::numbers::Numbers;
use crate::types::identifiers::Region;

/// One stored draw. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub region: Region,
    pub date: NaiveDate,
    pub numbers: Numbers,
}

impl DrawRecord {
    pub fn new(region: Region, date: NaiveDate, numbers: Numbers) -> Self {
        Self {
            region,
            date,
            numbers,
        }
    }
}
