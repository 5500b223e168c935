// Plain-text summary of a calculation, for sharing or printing.
use crate::models::CalculationResult;
use shared::utils::display_format::{
    format_area, format_currency_full, format_decimal, format_energy, format_integer, format_percentage,
    format_power, format_years,
};
use std::fmt::Write;

pub fn summary(result: &CalculationResult) -> String {
    let payback = match result.payback_years() {
        Some(years) => format_years(years),
        None => "not reached".to_string(),
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Solar system estimate");
    let _ = writeln!(out, "  Monthly consumption: {}", format_energy(result.monthly_consumption()));
    let _ = writeln!(out, "  System power:        {}", format_power(result.system_power()));
    let _ = writeln!(
        out,
        "  Panels:              {} ({} exact)",
        format_integer(result.panel_count() as i64),
        format_decimal(result.exact_panel_count(), 2)
    );
    let _ = writeln!(out, "  Monthly production:  {}", format_energy(result.system_monthly_production()));
    let _ = writeln!(out, "  Coverage:            {}", format_percentage(result.coverage_percentage()));
    let _ = writeln!(out, "  Monthly savings:     {}", format_currency_full(result.monthly_savings()));
    let _ = writeln!(out, "  Installation cost:   {}", format_currency_full(result.installation_cost()));
    let _ = writeln!(out, "  Payback:             {}", payback);
    let _ = write!(out, "  Required area:       {}", format_area(result.required_area()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::solar_calculator::calculate;
    use shared::models::{ConfigField, Configuration};

    #[test]
    fn test_summary_for_default_configuration() {
        let result = calculate(450.0, &Configuration::default()).unwrap();
        let text = summary(&result);
        assert!(text.contains("450,00 kWh"));
        assert!(text.contains("3,85 kW"));
        assert!(text.contains("7 (6,82 exact)"));
        assert!(text.contains("462,00 kWh"));
        assert!(text.contains("102,7%"));
        assert!(text.contains("$416.700 COP"));
        assert!(text.contains("$14.700.000 COP"));
        assert!(text.contains("2,9 years"));
        assert!(text.contains("14 m²"));
    }

    #[test]
    fn test_summary_without_payback() {
        let config = Configuration::default().with(ConfigField::ElectricityPrice, 0.0);
        let result = calculate(450.0, &config).unwrap();
        assert!(summary(&result).contains("Payback:             not reached"));
    }
}
