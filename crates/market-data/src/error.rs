// In crates/market-data/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A record failed to parse as a date plus four decimals. Fatal: the
    /// research use case requires a clean, complete run or none.
    #[error("malformed bar at line {line}: {reason}")]
    MalformedBar { line: usize, reason: String },

    #[error("failed to read price data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read price data: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
