// In crates/backtester/src/report.rs

use analytics::EquityPoint;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Emitted once when an entry intent fills.
#[derive(Debug, Clone, Serialize)]
pub struct TradeOpenRecord {
    pub date: NaiveDate,
    pub units: i64,
    pub price: Decimal,
}

/// Emitted once when an exit intent fills, completing the trade record.
#[derive(Debug, Clone, Serialize)]
pub struct TradeCloseRecord {
    pub date: NaiveDate,
    pub price: Decimal,
    /// Realized PnL at the exit price (not the stale-mark balance credit).
    pub pnl: Decimal,
}

/// Emitted once per bar after the smoothing update and crossover evaluation.
///
/// Values are exact; sinks that display them are responsible for rounding
/// (2 places for equity and OHLC, 3 for the averages and volatility).
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    pub date: NaiveDate,
    pub weekday: char,
    pub equity: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub slow_avg: Decimal,
    pub fast_avg: Decimal,
    pub volatility: Decimal,
    /// `""` until the automaton initializes, then `" +"` or `" -"`.
    pub marker: &'static str,
}

/// Receives the three per-run record streams: trade fills, per-bar equity,
/// and per-bar diagnostics.
pub trait ReportSink {
    fn trade_opened(&mut self, record: &TradeOpenRecord) -> anyhow::Result<()>;
    fn trade_closed(&mut self, record: &TradeCloseRecord) -> anyhow::Result<()>;
    fn equity(&mut self, record: &EquityPoint) -> anyhow::Result<()>;
    fn diagnostic(&mut self, record: &DiagnosticRecord) -> anyhow::Result<()>;
}

/// Discards every record; for runs where only the summary matters.
#[derive(Debug, Default)]
pub struct NullReportSink;

impl ReportSink for NullReportSink {
    fn trade_opened(&mut self, _record: &TradeOpenRecord) -> anyhow::Result<()> {
        Ok(())
    }

    fn trade_closed(&mut self, _record: &TradeCloseRecord) -> anyhow::Result<()> {
        Ok(())
    }

    fn equity(&mut self, _record: &EquityPoint) -> anyhow::Result<()> {
        Ok(())
    }

    fn diagnostic(&mut self, _record: &DiagnosticRecord) -> anyhow::Result<()> {
        Ok(())
    }
}
