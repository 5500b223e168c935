// Sizing, cost and payback of a photovoltaic installation.
use crate::error::EngineError;
use crate::models::CalculationResult;
use shared::models::{Configuration, DAYS_PER_MONTH};

pub const MONTHS_PER_YEAR: f64 = 12.0;
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Maps a monthly consumption (kWh/month) and a configuration snapshot to the
/// nine derived metrics.
///
/// Only the consumption is validated; the configuration is trusted. The panel
/// count is always rounded up, so the system may produce more than is consumed.
pub fn calculate(monthly_consumption: f64, configuration: &Configuration) -> Result<CalculationResult, EngineError> {
    // Written as a negation so NaN is rejected as well.
    if !(monthly_consumption > 0.0) {
        return Err(EngineError::InvalidInput("consumption must be greater than 0".to_string()));
    }
    if !monthly_consumption.is_finite() {
        return Err(EngineError::InvalidInput("consumption must be a finite number".to_string()));
    }

    let panel_monthly_output = configuration.panel_daily_output * DAYS_PER_MONTH;
    let panel_power_kw = configuration.panel_power_rating / WATTS_PER_KILOWATT;

    let exact_panel_count = monthly_consumption / panel_monthly_output;
    let panel_count = exact_panel_count.ceil() as u64;
    let panels = panel_count as f64;

    let system_power = panels * panel_power_kw;
    let system_monthly_production = panels * panel_monthly_output;

    // Savings assume every consumed kWh is self-produced at the input tariff.
    let monthly_savings = monthly_consumption * configuration.electricity_price;
    let installation_cost = panels * configuration.panel_installed_cost;

    let annual_savings = monthly_savings * MONTHS_PER_YEAR;
    let payback_years = (annual_savings > 0.0).then(|| installation_cost / annual_savings);

    let required_area = panels * configuration.panel_area;

    tracing::debug!(
        monthly_consumption,
        exact_panel_count,
        panel_count,
        system_power,
        ?payback_years,
        "Calculated photovoltaic system"
    );

    Ok(CalculationResult {
        monthly_consumption,
        system_power,
        panel_count,
        exact_panel_count,
        monthly_savings,
        installation_cost,
        payback_years,
        required_area,
        system_monthly_production,
    })
}

/// Production over consumption in percent; 0 when there is no consumption.
pub fn coverage_percentage(production: f64, consumption: f64) -> f64 {
    if consumption == 0.0 {
        return 0.0;
    }
    production / consumption * 100.0
}
