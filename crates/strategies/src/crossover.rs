// In crates/strategies/src/crossover.rs

use core_types::{MarketPosition, Signal};
use rust_decimal::Decimal;

/// Relationship between the fast and slow averages, as last observed on a
/// strict inequality. Equality never changes the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverState {
    #[default]
    Uninitialized,
    FastAboveSlow,
    SlowAboveFast,
}

/// The crossing observed on the current bar, if any.
///
/// A direction is reported only on a genuine transition between the two
/// initialized states. The first strict inequality after `Uninitialized`
/// establishes a baseline and is not a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossDirection {
    None,
    Up,
    Down,
}

/// Discrete state machine over the fast/slow average relationship.
///
/// `evaluate` is called exactly once per bar and also counts bars for the
/// warm-up gate: during the first `warm_up_bars` bars no signal is ever
/// emitted, regardless of what the averages do.
#[derive(Debug)]
pub struct CrossoverAutomaton {
    state: CrossoverState,
    bars_seen: u32,
    warm_up_bars: u32,
}

impl CrossoverAutomaton {
    pub fn new(warm_up_bars: u32) -> Self {
        Self {
            state: CrossoverState::Uninitialized,
            bars_seen: 0,
            warm_up_bars,
        }
    }

    pub fn state(&self) -> CrossoverState {
        self.state
    }

    /// True while intents are still suppressed by the warm-up gate.
    pub fn in_warm_up(&self) -> bool {
        self.bars_seen <= self.warm_up_bars
    }

    /// Two-character marker for the diagnostic log: blank until the state is
    /// initialized, then `" +"` while fast is on top and `" -"` otherwise.
    pub fn marker(&self) -> &'static str {
        match self.state {
            CrossoverState::Uninitialized => "",
            CrossoverState::FastAboveSlow => " +",
            CrossoverState::SlowAboveFast => " -",
        }
    }

    /// Observes this bar's averages, transitions the state on a strict
    /// inequality, and reports whether a genuine cross occurred.
    pub fn evaluate(&mut self, fast_avg: Decimal, slow_avg: Decimal) -> CrossDirection {
        self.bars_seen += 1;

        if fast_avg > slow_avg {
            let crossed = self.state == CrossoverState::SlowAboveFast;
            self.state = CrossoverState::FastAboveSlow;
            if crossed {
                return CrossDirection::Up;
            }
        } else if fast_avg < slow_avg {
            let crossed = self.state == CrossoverState::FastAboveSlow;
            self.state = CrossoverState::SlowAboveFast;
            if crossed {
                return CrossDirection::Down;
            }
        }

        CrossDirection::None
    }

    /// Derives the trading signal for this bar's cross, gated by warm-up and
    /// the single-position constraint: an up-cross while flat enters, a
    /// down-cross while long exits, everything else holds.
    pub fn signal(&self, direction: CrossDirection, position: MarketPosition) -> Signal {
        if self.in_warm_up() {
            return Signal::Hold;
        }
        match (direction, position) {
            (CrossDirection::Up, MarketPosition::Flat) => Signal::EnterLong,
            (CrossDirection::Down, MarketPosition::Long) => Signal::ExitLong,
            _ => Signal::Hold,
        }
    }
}
