// In crates/ledger/src/error.rs

use thiserror::Error;

/// Invariant violations in the back office. Either variant indicates a
/// logic defect in the crossover automaton, not a recoverable runtime
/// condition; the run aborts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invariant violation: a position is already open")]
    PositionAlreadyOpen,

    #[error("invariant violation: no open position to close")]
    NoOpenPosition,
}

pub type Result<T> = std::result::Result<T, Error>;
