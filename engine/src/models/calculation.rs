use serde::Serialize;

/// The nine derived metrics of one estimate.
///
/// Built once by [`crate::services::solar_calculator::calculate`] and read-only
/// afterwards: fields are only reachable through getters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub(crate) monthly_consumption: f64,        // kWh/month
    pub(crate) system_power: f64,               // kW
    pub(crate) panel_count: u64,                // rounded up
    pub(crate) exact_panel_count: f64,          // unrounded
    pub(crate) monthly_savings: f64,            // currency
    pub(crate) installation_cost: f64,          // currency
    pub(crate) payback_years: Option<f64>,      // None when savings never repay the cost
    pub(crate) required_area: f64,              // m²
    pub(crate) system_monthly_production: f64,  // kWh/month
}

impl CalculationResult {
    pub fn monthly_consumption(&self) -> f64 {
        self.monthly_consumption
    }

    pub fn system_power(&self) -> f64 {
        self.system_power
    }

    pub fn panel_count(&self) -> u64 {
        self.panel_count
    }

    pub fn exact_panel_count(&self) -> f64 {
        self.exact_panel_count
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_savings
    }

    pub fn installation_cost(&self) -> f64 {
        self.installation_cost
    }

    /// `None` means the payback is never reached (no positive savings).
    pub fn payback_years(&self) -> Option<f64> {
        self.payback_years
    }

    pub fn required_area(&self) -> f64 {
        self.required_area
    }

    pub fn system_monthly_production(&self) -> f64 {
        self.system_monthly_production
    }

    /// Production over consumption, as a percentage.
    pub fn coverage_percentage(&self) -> f64 {
        crate::services::solar_calculator::coverage_percentage(
            self.system_monthly_production,
            self.monthly_consumption,
        )
    }
}
