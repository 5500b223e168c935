use serde::{Deserialize, Serialize};

/// Days used to turn a panel's daily output into a monthly figure.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// The five tunable unit constants of a photovoltaic estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    PanelDailyOutput,
    PanelPowerRating,
    PanelArea,
    ElectricityPrice,
    PanelInstalledCost,
}

impl ConfigField {
    pub const ALL: [ConfigField; 5] = [
        ConfigField::PanelDailyOutput,
        ConfigField::PanelPowerRating,
        ConfigField::PanelArea,
        ConfigField::ElectricityPrice,
        ConfigField::PanelInstalledCost,
    ];

    /// Key under which the value is persisted.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::PanelDailyOutput => "panelDailyOutput",
            ConfigField::PanelPowerRating => "panelPowerRating",
            ConfigField::PanelArea => "panelArea",
            ConfigField::ElectricityPrice => "electricityPrice",
            ConfigField::PanelInstalledCost => "panelInstalledCost",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            ConfigField::PanelDailyOutput => 2.2,
            ConfigField::PanelPowerRating => 550.0,
            ConfigField::PanelArea => 2.0,
            ConfigField::ElectricityPrice => 926.0,
            ConfigField::PanelInstalledCost => 2_100_000.0,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Snapshot of the unit constants taken at calculation time.
///
/// Values are copied out of the settings store, so a snapshot never changes
/// when the store is written afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub panel_daily_output: f64,   // kWh/day
    pub panel_power_rating: f64,   // W
    pub panel_area: f64,           // m²
    pub electricity_price: f64,    // currency/kWh
    pub panel_installed_cost: f64, // currency per panel
}

impl Configuration {
    pub fn get(&self, field: ConfigField) -> f64 {
        match field {
            ConfigField::PanelDailyOutput => self.panel_daily_output,
            ConfigField::PanelPowerRating => self.panel_power_rating,
            ConfigField::PanelArea => self.panel_area,
            ConfigField::ElectricityPrice => self.electricity_price,
            ConfigField::PanelInstalledCost => self.panel_installed_cost,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: ConfigField, value: f64) -> Self {
        match field {
            ConfigField::PanelDailyOutput => self.panel_daily_output = value,
            ConfigField::PanelPowerRating => self.panel_power_rating = value,
            ConfigField::PanelArea => self.panel_area = value,
            ConfigField::ElectricityPrice => self.electricity_price = value,
            ConfigField::PanelInstalledCost => self.panel_installed_cost = value,
        }
        self
    }

    /// Energy one panel produces per month (kWh/month).
    pub fn panel_monthly_output(&self) -> f64 {
        self.panel_daily_output * DAYS_PER_MONTH
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            panel_daily_output: ConfigField::PanelDailyOutput.default_value(),
            panel_power_rating: ConfigField::PanelPowerRating.default_value(),
            panel_area: ConfigField::PanelArea.default_value(),
            electricity_price: ConfigField::ElectricityPrice.default_value(),
            panel_installed_cost: ConfigField::PanelInstalledCost.default_value(),
        }
    }
}
