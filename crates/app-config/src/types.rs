// In crates/app-config/src/types.rs

use serde::Deserialize;

use execution::SimulationSettings;
use risk::RiskSettings;
use strategies::CrossoverSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Periods and warm-up for the crossover strategy.
    pub strategy: CrossoverSettings,
    /// Heat, volatility multiplier, and size granularity for sizing.
    pub risk: RiskSettings,
    /// Skid, commission, and starting equity for the simulated fills.
    pub simulation: SimulationSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}
