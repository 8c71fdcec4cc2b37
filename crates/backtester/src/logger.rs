// In crates/backtester/src/logger.rs

use analytics::{ClosedTrade, EquityPoint};
use chrono::NaiveDate;
use ledger::Trade;
use rust_decimal::Decimal;

/// A logger responsible for recording trades and equity changes during a backtest.
#[derive(Debug, Default)]
pub struct TradeLogger {
    pub trades: Vec<ClosedTrade>,
    pub equity_curve: Vec<EquityPoint>,
    pending_entry: Option<(NaiveDate, i64, Decimal)>,
}

impl TradeLogger {
    /// Creates a new, empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a point in the equity curve.
    pub fn record_equity(&mut self, point: EquityPoint) {
        self.equity_curve.push(point);
    }

    /// Records the entry half of a trade at its fill.
    pub fn record_entry(&mut self, date: NaiveDate, units: i64, price: Decimal) {
        self.pending_entry = Some((date, units, price));
    }

    /// Completes the open trade record with the exit fill.
    pub fn record_exit(&mut self, exit_date: NaiveDate, trade: &Trade) {
        let (entry_date, units, entry_price) = self
            .pending_entry
            .take()
            .unwrap_or((exit_date, trade.units, trade.entry));

        self.trades.push(ClosedTrade {
            units,
            entry_date,
            exit_date,
            entry_price,
            exit_price: trade.exit.unwrap_or(trade.entry),
            pnl: trade.pnl,
        });
    }
}
