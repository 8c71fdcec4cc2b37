// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

/// Configuration for the moving-average crossover strategy.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrossoverSettings {
    /// Period of the fast exponential average, in bars.
    pub fast_period: u32,
    /// Period of the slow exponential average, in bars.
    pub slow_period: u32,
    /// Period of the volatility (average true range) estimate, in bars.
    pub vol_period: u32,
    /// Number of initial bars during which no trading intent is generated,
    /// so the recurrences can stabilize from their cold-start seed.
    pub warm_up_bars: u32,
}
