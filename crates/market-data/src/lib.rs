// In crates/market-data/src/lib.rs

pub mod error;
pub mod loader;

pub use error::{Error, Result};
pub use loader::{load_bars, read_bars};
