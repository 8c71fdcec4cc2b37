// In crates/risk/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Sizing was invoked with a zero risk-per-unit. The warm-up gate is
    /// supposed to make this unreachable, but it is checked explicitly
    /// rather than left to produce a nonsense size.
    #[error("position sizing undefined: risk per unit is zero")]
    DivisionUndefined,

    #[error("computed position size {0} is not representable as a unit count")]
    InvalidSize(rust_decimal::Decimal),
}

pub type Result<T> = std::result::Result<T, Error>;
