pub mod numbers;
pub mod record;

pub use numbers::{Numbers, NumbersError};
pub use record::DrawRecord;
