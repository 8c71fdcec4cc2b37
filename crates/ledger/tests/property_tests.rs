//! Property test: the equity identity holds after every mark-to-market,
//! across arbitrary open/mark/close sequences.

use ledger::{Ledger, Trade};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_price() -> impl Strategy<Value = Decimal> {
    // 3-decimal prices, matching the bar data precision.
    (1_000i64..500_000).prop_map(|p| Decimal::new(p, 3))
}

fn arb_units() -> impl Strategy<Value = i64> {
    (0i64..40).prop_map(|lots| lots * 250)
}

proptest! {
    #[test]
    fn equity_identity_is_exact_across_trade_lifecycles(
        lifecycles in prop::collection::vec(
            (arb_units(), arb_price(), prop::collection::vec(arb_price(), 1..20), arb_price()),
            1..10,
        )
    ) {
        let mut ledger = Ledger::new(Decimal::new(100_000_000, 2));

        for (units, entry, marks, exit) in lifecycles {
            ledger.open_trade(Trade::new(units, entry)).unwrap();
            for price in marks {
                ledger.mark_to_market(price);
                prop_assert_eq!(ledger.equity, ledger.balance + ledger.open_pnl);
            }
            ledger.close_trade(exit).unwrap();
            ledger.mark_to_market(exit);
            prop_assert_eq!(ledger.equity, ledger.balance + ledger.open_pnl);
            prop_assert!(ledger.open_trade.is_none());
        }
    }
}
