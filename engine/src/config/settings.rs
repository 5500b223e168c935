// Unit constants store and the runtime settings of the engine binary.
use crate::data::preferences::{MemoryPreferences, PreferencesBackend, StoragePrecision};
use crate::error::EngineError;
use crate::services::validation;
use shared::models::{ConfigField, Configuration, DAYS_PER_MONTH};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Owns the five unit constants on top of a persistent backend.
///
/// Construct one per process and share it (e.g. behind an `Arc`). `set` does no
/// bounds checking; range checks belong to the caller, see
/// [`crate::services::validation`].
#[derive(Debug)]
pub struct SettingsStore<B: PreferencesBackend = MemoryPreferences> {
    backend: B,
    precision: StoragePrecision,
}

impl<B: PreferencesBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_precision(backend, StoragePrecision::Full)
    }

    pub fn with_precision(backend: B, precision: StoragePrecision) -> Self {
        SettingsStore { backend, precision }
    }

    /// Persisted value for `field`, or its documented default.
    pub fn get(&self, field: ConfigField) -> f64 {
        let default = self.precision.apply(field.default_value());
        self.backend.read_numeric(field.key(), default)
    }

    /// Persists `value` immediately. Backend failures are returned, not swallowed.
    pub fn set(&self, field: ConfigField, value: f64) -> Result<(), EngineError> {
        let stored = self.precision.apply(value);
        tracing::debug!(field = %field, value, stored, "Writing unit constant");
        self.backend.write_numeric(field.key(), stored)
    }

    pub fn reset_to_defaults(&self) -> Result<(), EngineError> {
        tracing::info!("Resetting unit constants to defaults");
        self.backend.clear_all()
    }

    /// kWh one panel produces per month.
    pub fn monthly_panel_output(&self) -> f64 {
        self.get(ConfigField::PanelDailyOutput) * DAYS_PER_MONTH
    }

    /// Copies the current values out of the store.
    pub fn snapshot(&self) -> Configuration {
        Configuration {
            panel_daily_output: self.get(ConfigField::PanelDailyOutput),
            panel_power_rating: self.get(ConfigField::PanelPowerRating),
            panel_area: self.get(ConfigField::PanelArea),
            electricity_price: self.get(ConfigField::ElectricityPrice),
            panel_installed_cost: self.get(ConfigField::PanelInstalledCost),
        }
    }

    pub fn precision(&self) -> StoragePrecision {
        self.precision
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl Default for SettingsStore<MemoryPreferences> {
    fn default() -> Self {
        SettingsStore::new(MemoryPreferences::new())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(EngineError::ConfigError(format!(
                "Unknown output format '{}'. Use 'text' or 'json'.",
                other
            ))),
        }
    }
}

/// Runtime options of the engine binary.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Used when RUST_LOG is not set.
    pub log_filter: String,
    pub output: OutputFormat,
    pub precision: StoragePrecision,
    /// Raw text per unit constant, validated before it reaches the store.
    pub overrides: BTreeMap<ConfigField, String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            log_filter: "info".to_string(),
            output: OutputFormat::Text,
            precision: StoragePrecision::Full,
            overrides: BTreeMap::new(),
        }
    }
}

pub const LOG_FILTER_VAR: &str = "SOLAR_LOG";
pub const OUTPUT_VAR: &str = "SOLAR_OUTPUT";
pub const PRECISION_VAR: &str = "SOLAR_PRECISION";

pub fn override_var(field: ConfigField) -> &'static str {
    match field {
        ConfigField::PanelDailyOutput => "SOLAR_PANEL_DAILY_OUTPUT",
        ConfigField::PanelPowerRating => "SOLAR_PANEL_POWER_RATING",
        ConfigField::PanelArea => "SOLAR_PANEL_AREA",
        ConfigField::ElectricityPrice => "SOLAR_ELECTRICITY_PRICE",
        ConfigField::PanelInstalledCost => "SOLAR_PANEL_INSTALLED_COST",
    }
}

impl EngineSettings {
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = EngineSettings::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            settings.log_filter = filter;
        }
        if let Some(output) = lookup(OUTPUT_VAR) {
            settings.output = output.parse()?;
        }
        if let Some(precision) = lookup(PRECISION_VAR) {
            settings.precision = precision.parse()?;
        }
        for field in ConfigField::ALL {
            if let Some(raw) = lookup(override_var(field)) {
                settings.overrides.insert(field, raw);
            }
        }
        Ok(settings)
    }

    /// Writes every valid override into `store` and returns how many were applied.
    /// Invalid ones are logged and skipped so the defaults stay in effect.
    pub fn apply_overrides<B: PreferencesBackend>(&self, store: &SettingsStore<B>) -> Result<usize, EngineError> {
        let mut applied = 0;
        for (field, raw) in &self.overrides {
            match validation::apply_validated(store, *field, raw) {
                Ok(value) => {
                    tracing::info!(field = %field, value, "Applied unit constant override");
                    applied += 1;
                }
                Err(e) if e.is_input_error() => {
                    tracing::warn!(field = %field, raw = %raw, error = %e, "Ignoring invalid unit constant override");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(applied)
    }
}
