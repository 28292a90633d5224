// One table, one row per (region, date). The UNIQUE constraint is what keeps
// a draw from being counted twice.
pub(crate) const CREATE_RESULTS: &str = "
CREATE TABLE IF NOT EXISTS results(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    region TEXT NOT NULL,
    date TEXT NOT NULL,
    numbers TEXT NOT NULL,
    UNIQUE(region, date)
)";

pub(crate) const INSERT_OR_IGNORE: &str =
    "INSERT OR IGNORE INTO results(region, date, numbers) VALUES (?1, ?2, ?3)";

pub(crate) const SELECT_RECENT: &str =
    "SELECT date, numbers FROM results WHERE region = ?1 ORDER BY date DESC LIMIT ?2";

pub(crate) const COUNT_REGION: &str = "SELECT COUNT(*) FROM results WHERE region = ?1";

/// ISO-8601 calendar date. Lexicographic order of this form is chronological,
/// which `ORDER BY date` relies on.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
