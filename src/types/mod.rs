pub mod advice;
pub mod identifiers;

pub use advice::{Advice, AdviceError, StationPick, SuggestionSet};
pub use identifiers::{DigitKey, IdentifierError, Region};
