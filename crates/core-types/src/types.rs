// In crates/core-types/src/types.rs

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily OHLC price record.
///
/// Bars are immutable once read and are consumed strictly in file order,
/// which the system requires to equal chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Bar {
    /// One-letter weekday code used by the diagnostic log
    /// (Mon..Sun -> M T W H F S U).
    pub fn weekday_code(&self) -> char {
        match self.date.weekday() {
            Weekday::Mon => 'M',
            Weekday::Tue => 'T',
            Weekday::Wed => 'W',
            Weekday::Thu => 'H',
            Weekday::Fri => 'F',
            Weekday::Sat => 'S',
            Weekday::Sun => 'U',
        }
    }
}

/// The raw trading intent produced by a strategy for the current bar,
/// before position sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// No action this bar.
    Hold,
    /// Open a long position at the next bar's open.
    EnterLong,
    /// Close the open long position at the next bar's open.
    ExitLong,
}

/// A sized order waiting out the one-bar execution lag.
///
/// At most one intent is pending at a time: the previous bar's intent is
/// consumed before the current bar may generate a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderIntent {
    /// Enter long with the given unit count, sized from the equity and
    /// volatility of the bar that generated the intent.
    EnterLong { units: i64 },
    /// Exit the full open long position.
    ExitLong,
}

/// The market position held by the single position slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarketPosition {
    #[default]
    Flat,
    Long,
}
