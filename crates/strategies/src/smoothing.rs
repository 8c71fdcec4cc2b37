// In crates/strategies/src/smoothing.rs

use core_types::Bar;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::CrossoverSettings;

/// The smoothed values produced by one update, handed to the automaton and
/// the diagnostic log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothedValues {
    pub fast_avg: Decimal,
    pub slow_avg: Decimal,
    pub volatility: Decimal,
}

// Internal recurrence state; present from the first bar onward.
#[derive(Debug, Clone)]
struct SmoothingState {
    fast_avg: Decimal,
    slow_avg: Decimal,
    volatility: Decimal,
    prev_close: Decimal,
}

/// Maintains the fast/slow exponential averages and the true-range
/// volatility estimate, updated once per bar.
///
/// The time constants are half-period constants, `TC = (period + 1) / 2`,
/// not the conventional EMA smoothing factor `2 / (period + 1)`, and the
/// true-range proxy `max(high, prev_close) - min(low, prev_close)` omits the
/// absolute-difference terms of a textbook true range. Both are intentional
/// and must not be "corrected": the observable output depends on them.
#[derive(Debug)]
pub struct SmoothingEngine {
    tc_fast: Decimal,
    tc_slow: Decimal,
    tc_vol: Decimal,
    state: Option<SmoothingState>,
}

impl SmoothingEngine {
    pub fn new(settings: &CrossoverSettings) -> Self {
        Self {
            tc_fast: half_period(settings.fast_period),
            tc_slow: half_period(settings.slow_period),
            tc_vol: half_period(settings.vol_period),
            state: None,
        }
    }

    /// Folds one bar into the recurrences and returns the updated values.
    ///
    /// The very first bar seeds `fast = slow = close` and
    /// `volatility = high - low` (no previous-close term exists yet). On
    /// every later bar the true-range proxy is captured before anything
    /// else, and `prev_close` is replaced only at the very end.
    pub fn update(&mut self, bar: &Bar) -> SmoothedValues {
        let state = match self.state.take() {
            None => SmoothingState {
                fast_avg: bar.close,
                slow_avg: bar.close,
                volatility: bar.high - bar.low,
                prev_close: bar.close,
            },
            Some(mut state) => {
                let tr = bar.high.max(state.prev_close) - bar.low.min(state.prev_close);

                state.fast_avg += (bar.close - state.fast_avg) / self.tc_fast;
                state.slow_avg += (bar.close - state.slow_avg) / self.tc_slow;
                state.volatility += (tr - state.volatility) / self.tc_vol;
                state.prev_close = bar.close;
                state
            }
        };

        let values = SmoothedValues {
            fast_avg: state.fast_avg,
            slow_avg: state.slow_avg,
            volatility: state.volatility,
        };
        self.state = Some(state);
        values
    }
}

fn half_period(period: u32) -> Decimal {
    (Decimal::from(period) + dec!(1)) / dec!(2)
}
