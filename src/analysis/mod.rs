pub mod frequency;
pub mod suggestion;
pub mod versioning;

pub use frequency::{Aggregator, FrequencyTable, LastTwoDigits};
pub use suggestion::{station_picks, suggest, MAX_PAIRS, PRIMARY_SIZE, TRIPLE_SIZE};
pub use versioning::window_version;
