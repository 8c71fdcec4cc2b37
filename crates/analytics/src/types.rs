// In crates/analytics/src/types.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A complete record of a single closed trade, from entry fill to exit fill.
#[derive(Debug, Clone, Serialize)]
pub struct ClosedTrade {
    pub units: i64,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    /// Realized PnL as computed at the exit fill. Note: the amount credited
    /// to the account balance uses the previous bar's mark and can differ
    /// from this by one bar's move.
    pub pnl: Decimal,
}

/// One per-bar point of the equity curve, carrying exact (unrounded) values.
#[derive(Debug, Clone, Serialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub balance: Decimal,
    pub open_pnl: Decimal,
    pub equity: Decimal,
}

/// Summary of a strategy's performance over a backtest run.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PerformanceReport {
    pub net_pnl_absolute: Decimal,
    pub net_pnl_percentage: f64,
    pub max_drawdown_absolute: Decimal,
    pub max_drawdown_percentage: f64,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub expectancy: Decimal,
    pub total_trades: u32,
}

impl PerformanceReport {
    pub fn new() -> Self {
        Self::default()
    }
}
