pub mod schema;
pub mod store;

pub use store::{DrawStore, StoreError};
