// In crates/execution/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("order execution failed: {0}")]
    Ledger(#[from] ledger::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
