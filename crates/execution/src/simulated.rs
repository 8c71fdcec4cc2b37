// In crates/execution/src/simulated.rs

use crate::types::SimulationSettings;
use crate::Result;
use core_types::{Bar, OrderIntent};
use ledger::{Ledger, Trade};
use rust_decimal::Decimal;

/// The outcome of applying a pending intent against a bar.
#[derive(Debug, Clone)]
pub enum Fill {
    Entry { units: i64, price: Decimal },
    Exit { price: Decimal, trade: Trade },
}

/// Turns the previous bar's pending intent into a fill against the current
/// bar, with a one-bar lag and adverse price skid.
#[derive(Debug)]
pub struct ExecutionSimulator {
    settings: SimulationSettings,
}

impl ExecutionSimulator {
    pub fn new(settings: SimulationSettings) -> Self {
        Self { settings }
    }

    /// Applies `intent` at the current bar's open. At most one fill occurs
    /// per bar because at most one intent can be pending.
    ///
    /// Entries slip toward the high, exits toward the low:
    /// entry = `open + skid * (high - open)`,
    /// exit  = `open - skid * (open - low)`.
    pub fn apply(&self, intent: &OrderIntent, bar: &Bar, ledger: &mut Ledger) -> Result<Fill> {
        match *intent {
            OrderIntent::EnterLong { units } => {
                let price = bar.open + self.settings.skid * (bar.high - bar.open);
                ledger.open_trade(Trade::new(units, price))?;
                tracing::debug!(date = %bar.date, units, price = %price, "entry fill");
                Ok(Fill::Entry { units, price })
            }
            OrderIntent::ExitLong => {
                let price = bar.open - self.settings.skid * (bar.open - bar.low);
                let trade = ledger.close_trade(price)?;
                tracing::debug!(date = %bar.date, price = %price, pnl = %trade.pnl, "exit fill");
                Ok(Fill::Exit { price, trade })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn simulator() -> ExecutionSimulator {
        ExecutionSimulator::new(SimulationSettings {
            skid: dec!(0.500),
            commission: dec!(0.000),
            start_equity: dec!(1000000.00),
        })
    }

    fn bar(open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn entry_skids_halfway_toward_the_high() {
        let mut ledger = Ledger::new(dec!(1000000.00));
        let fill = simulator()
            .apply(
                &OrderIntent::EnterLong { units: 500 },
                &bar(dec!(100), dec!(110), dec!(98), dec!(105)),
                &mut ledger,
            )
            .unwrap();

        match fill {
            Fill::Entry { units, price } => {
                assert_eq!(units, 500);
                assert_eq!(price, dec!(105.000));
            }
            other => panic!("expected entry fill, got {other:?}"),
        }
        assert!(ledger.open_trade.is_some());
    }

    #[test]
    fn exit_skids_halfway_toward_the_low() {
        let mut ledger = Ledger::new(dec!(1000000.00));
        ledger.open_trade(Trade::new(500, dec!(90.000))).unwrap();

        let fill = simulator()
            .apply(
                &OrderIntent::ExitLong,
                &bar(dec!(100), dec!(102), dec!(90), dec!(95)),
                &mut ledger,
            )
            .unwrap();

        match fill {
            Fill::Exit { price, trade } => {
                assert_eq!(price, dec!(95.000));
                // Realized PnL on the record is fresh: 500 * (95 - 90).
                assert_eq!(trade.pnl, dec!(2500));
            }
            other => panic!("expected exit fill, got {other:?}"),
        }
        assert!(ledger.open_trade.is_none());
    }

    #[test]
    fn entering_while_long_propagates_the_invariant_violation() {
        let mut ledger = Ledger::new(dec!(1000000.00));
        ledger.open_trade(Trade::new(250, dec!(100.000))).unwrap();

        let err = simulator()
            .apply(
                &OrderIntent::EnterLong { units: 250 },
                &bar(dec!(100), dec!(101), dec!(99), dec!(100)),
                &mut ledger,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Ledger(ledger::Error::PositionAlreadyOpen)
        ));
    }
}
