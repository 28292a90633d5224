pub mod fetcher;
pub mod scheduler;

pub use fetcher::{DrawFetcher, FetchError, FetchedDraw};
pub use scheduler::{BackfillError, BackfillReport, BackfillScheduler, DateFailure};
