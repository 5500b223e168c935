// engine/src/services/solar_calculator/mod.rs
// The calculation service: raw text in, result record out.
// The pure sizing math lives in the `sizing` submodule.

use crate::config::settings::SettingsStore;
use crate::data::preferences::{MemoryPreferences, PreferencesBackend};
use crate::error::EngineError;
use crate::models::CalculationResult;
use shared::utils::decimal_input::parse_positive_decimal;
use std::sync::Arc;

pub mod sizing;

pub use sizing::{calculate, coverage_percentage};

/// Runs calculations against the current constants of a shared settings store.
#[derive(Debug)]
pub struct CalculationService<B: PreferencesBackend = MemoryPreferences> {
    settings: Arc<SettingsStore<B>>,
}

impl<B: PreferencesBackend> Clone for CalculationService<B> {
    fn clone(&self) -> Self {
        CalculationService {
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<B: PreferencesBackend> CalculationService<B> {
    pub fn new(settings: Arc<SettingsStore<B>>) -> Self {
        CalculationService { settings }
    }

    pub fn settings(&self) -> &SettingsStore<B> {
        &self.settings
    }

    /// Calculates with a snapshot of the store taken at call time.
    pub fn calculate(&self, monthly_consumption: f64) -> Result<CalculationResult, EngineError> {
        let configuration = self.settings.snapshot();
        calculate(monthly_consumption, &configuration)
    }

    /// Parses user text ("450,5" or "450.5") and calculates.
    ///
    /// Unparseable text surfaces as [`EngineError::Parse`], a parsed value <= 0
    /// as [`EngineError::InvalidInput`].
    pub fn calculate_from_text(&self, input: &str) -> Result<CalculationResult, EngineError> {
        let monthly_consumption = parse_positive_decimal(input)?;
        tracing::debug!(input = %input, monthly_consumption, "Parsed monthly consumption");
        self.calculate(monthly_consumption)
    }
}
