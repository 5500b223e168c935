// Engine library root
// Declares the modules of the photovoltaic calculation engine.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;

pub use config::settings::SettingsStore;
pub use data::preferences::{MemoryPreferences, PreferencesBackend, StoragePrecision};
pub use error::EngineError;
pub use models::CalculationResult;
pub use services::solar_calculator::{calculate, coverage_percentage, CalculationService};
