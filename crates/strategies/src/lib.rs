// In crates/strategies/src/lib.rs

pub mod crossover;
pub mod smoothing;
pub mod types;

// Re-export public types
pub use crossover::{CrossDirection, CrossoverAutomaton, CrossoverState};
pub use smoothing::{SmoothedValues, SmoothingEngine};
pub use types::CrossoverSettings;
