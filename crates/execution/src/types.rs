// In crates/execution/src/types.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimulationSettings {
    /// Fraction of the open-to-extreme range applied as adverse slippage on
    /// fills (e.g. 0.500 fills an entry halfway between open and high).
    pub skid: Decimal,

    /// Per-trade commission. Carried in the configuration surface but not
    /// applied to PnL in this version.
    pub commission: Decimal,

    /// Starting account equity for the run.
    pub start_equity: Decimal,
}
