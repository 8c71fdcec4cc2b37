// In crates/risk/src/types.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RiskSettings {
    /// Account heat: the fraction of equity allocated as risk budget per
    /// trade (e.g. 0.100 for 10%).
    pub heat: Decimal,

    /// Scales the volatility estimate into a per-unit risk amount.
    pub vol_multiplier: Decimal,

    /// Trade sizes are rounded to the nearest multiple of this many units.
    pub size_granularity: u32,
}
