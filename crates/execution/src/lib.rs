// In crates/execution/src/lib.rs

pub mod error;
pub mod simulated;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use simulated::{ExecutionSimulator, Fill};
pub use types::SimulationSettings;
