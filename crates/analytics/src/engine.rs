// In crates/analytics/src/engine.rs

use crate::types::{ClosedTrade, EquityPoint, PerformanceReport};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The engine responsible for calculating performance metrics from trade data.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculates a performance report from a set of trades and an equity curve.
    pub fn calculate(
        &self,
        initial_capital: Decimal,
        trades: &[ClosedTrade],
        equity_curve: &[EquityPoint],
    ) -> PerformanceReport {
        let mut report = PerformanceReport::new();
        if trades.is_empty() {
            return report; // Return a default report if there are no trades.
        }

        // 1. Total Trades
        report.total_trades = trades.len() as u32;

        // 2. Net P&L (Absolute & Percentage)
        report.net_pnl_absolute = trades.iter().map(|t| t.pnl).sum();
        if initial_capital > dec!(0) {
            report.net_pnl_percentage = (report.net_pnl_absolute / initial_capital)
                .to_f64()
                .unwrap_or(0.0)
                * 100.0;
        }

        // 3. Win Rate & Profit Factor
        let winning: Vec<&ClosedTrade> = trades.iter().filter(|t| t.pnl > dec!(0)).collect();
        let losing: Vec<&ClosedTrade> = trades.iter().filter(|t| t.pnl < dec!(0)).collect();
        report.win_rate = (winning.len() as f64 / report.total_trades as f64) * 100.0;

        let gross_profit: Decimal = winning.iter().map(|t| t.pnl).sum();
        let gross_loss: Decimal = losing.iter().map(|t| t.pnl).sum::<Decimal>().abs();
        report.profit_factor = if gross_loss > dec!(0) {
            (gross_profit / gross_loss).to_f64().unwrap_or(0.0)
        } else {
            f64::INFINITY // Pure profit
        };

        // 4. Max Drawdown (Absolute & Percentage)
        let mut peak_equity = initial_capital;
        let mut max_drawdown = dec!(0);
        for point in equity_curve {
            peak_equity = peak_equity.max(point.equity);
            let drawdown = peak_equity - point.equity;
            max_drawdown = max_drawdown.max(drawdown);
        }
        report.max_drawdown_absolute = max_drawdown;
        if peak_equity > dec!(0) {
            report.max_drawdown_percentage =
                (max_drawdown / peak_equity).to_f64().unwrap_or(0.0) * 100.0;
        }

        // 5. Expectancy (Average P&L per trade)
        report.expectancy = report.net_pnl_absolute / Decimal::from(trades.len());

        report
    }
}
