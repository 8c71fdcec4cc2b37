// In crates/ledger/src/types.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Error, Result};

/// The single open trade, owned by the ledger from open to close.
#[derive(Debug, Clone, Serialize)]
pub struct Trade {
    /// Signed unit count (always positive here; only longs exist).
    pub units: i64,
    pub entry: Decimal,
    pub exit: Option<Decimal>,
    /// Mark-to-market PnL while open; realized PnL once closed.
    pub pnl: Decimal,
}

impl Trade {
    pub fn new(units: i64, entry: Decimal) -> Self {
        Self {
            units,
            entry,
            exit: None,
            pnl: Decimal::ZERO,
        }
    }

    /// Recomputes unrealized PnL against a reference price.
    pub fn mark(&mut self, price: Decimal) -> Decimal {
        self.pnl = Decimal::from(self.units) * (price - self.entry);
        self.pnl
    }
}

/// Back office: account balance, open PnL, and equity for the one position
/// slot. `equity == balance + open_pnl` after every mark.
#[derive(Debug, Serialize)]
pub struct Ledger {
    pub balance: Decimal,
    pub open_pnl: Decimal,
    pub equity: Decimal,
    pub open_trade: Option<Trade>,
}

impl Ledger {
    pub fn new(initial_balance: Decimal) -> Self {
        Self {
            balance: initial_balance,
            open_pnl: Decimal::ZERO,
            equity: initial_balance,
            open_trade: None,
        }
    }

    /// Takes ownership of a newly filled trade. Fails if the single position
    /// slot is already occupied.
    pub fn open_trade(&mut self, trade: Trade) -> Result<()> {
        if self.open_trade.is_some() {
            return Err(Error::PositionAlreadyOpen);
        }
        self.open_trade = Some(trade);
        Ok(())
    }

    /// Closes the open trade at `exit_price` and returns it with its exit
    /// and freshly computed realized PnL filled in.
    ///
    /// The balance is credited with the *current* `open_pnl` — the value of
    /// the last mark-to-market, one bar stale relative to the exit fill —
    /// not with the realized PnL recorded on the returned trade. The two can
    /// differ by one bar's price move; the trade log and the balance are
    /// deliberately not reconciled.
    pub fn close_trade(&mut self, exit_price: Decimal) -> Result<Trade> {
        let mut trade = self.open_trade.take().ok_or(Error::NoOpenPosition)?;
        trade.exit = Some(exit_price);
        trade.pnl = Decimal::from(trade.units) * (exit_price - trade.entry);
        self.balance += self.open_pnl;
        Ok(trade)
    }

    /// Recomputes `open_pnl` against `price` and re-establishes the equity
    /// identity. Called exactly once per bar, after any fill.
    pub fn mark_to_market(&mut self, price: Decimal) {
        self.open_pnl = match self.open_trade.as_mut() {
            Some(trade) => trade.mark(price),
            None => Decimal::ZERO,
        };
        self.equity = self.balance + self.open_pnl;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn equity_identity_holds_after_every_mark() {
        let mut ledger = Ledger::new(dec!(1000000.00));
        ledger.mark_to_market(dec!(100));
        assert_eq!(ledger.equity, ledger.balance + ledger.open_pnl);

        ledger.open_trade(Trade::new(500, dec!(100.000))).unwrap();
        for price in [dec!(101.5), dec!(99.25), dec!(100.000), dec!(133.333)] {
            ledger.mark_to_market(price);
            assert_eq!(ledger.equity, ledger.balance + ledger.open_pnl);
        }
    }

    #[test]
    fn second_open_violates_the_single_position_invariant() {
        let mut ledger = Ledger::new(dec!(1000.00));
        ledger.open_trade(Trade::new(250, dec!(10.000))).unwrap();
        let err = ledger.open_trade(Trade::new(250, dec!(11.000))).unwrap_err();
        assert!(matches!(err, Error::PositionAlreadyOpen));
    }

    #[test]
    fn closing_without_a_position_fails() {
        let mut ledger = Ledger::new(dec!(1000.00));
        assert!(matches!(
            ledger.close_trade(dec!(10.000)),
            Err(Error::NoOpenPosition)
        ));
    }

    #[test]
    fn close_credits_the_stale_mark_not_the_exit_pnl() {
        let mut ledger = Ledger::new(dec!(1000000.00));
        ledger.open_trade(Trade::new(100, dec!(10.000))).unwrap();

        // Last mark of the previous bar: close 12 -> open PnL 200.
        ledger.mark_to_market(dec!(12.000));
        assert_eq!(ledger.open_pnl, dec!(200.000));

        // Exit fill at 13 on the next bar, before that bar's mark.
        let trade = ledger.close_trade(dec!(13.000)).unwrap();

        // The trade record carries the fresh realized PnL...
        assert_eq!(trade.pnl, dec!(300.000));
        assert_eq!(trade.exit, Some(dec!(13.000)));
        // ...but the balance was credited with the stale mark.
        assert_eq!(ledger.balance, dec!(1000200.000));

        // The bar's mark then zeroes open PnL and restores the identity.
        ledger.mark_to_market(dec!(13.500));
        assert_eq!(ledger.open_pnl, Decimal::ZERO);
        assert_eq!(ledger.equity, ledger.balance);
    }
}
