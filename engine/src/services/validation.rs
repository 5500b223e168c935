// Range checks applied by front ends before values reach the store or the engine.
// The store accepts anything; these bounds are what the settings and input
// screens allow.
use crate::config::settings::SettingsStore;
use crate::data::preferences::PreferencesBackend;
use crate::error::EngineError;
use crate::models::CalculationResult;
use crate::services::solar_calculator::CalculationService;
use shared::models::ConfigField;
use shared::utils::decimal_input::parse_positive_decimal;

pub const MAX_MONTHLY_CONSUMPTION: f64 = 100_000.0; // kWh/month

/// Inclusive upper bound per field; the lower bound is always exclusive 0.
pub fn max_value(field: ConfigField) -> f64 {
    match field {
        ConfigField::PanelDailyOutput => 100.0,
        ConfigField::PanelPowerRating => 10_000.0,
        ConfigField::PanelArea => 100.0,
        ConfigField::ElectricityPrice => 10_000.0,
        ConfigField::PanelInstalledCost => 100_000_000.0,
    }
}

pub fn validate_field(field: ConfigField, value: f64) -> Result<(), EngineError> {
    let max = max_value(field);
    if value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(EngineError::out_of_range(field, value, max))
    }
}

pub fn validate_consumption(value: f64) -> Result<(), EngineError> {
    if value > 0.0 && value <= MAX_MONTHLY_CONSUMPTION {
        Ok(())
    } else {
        Err(EngineError::ValidationFailure {
            field: "monthlyConsumption".to_string(),
            value,
            min: 0.0,
            max: MAX_MONTHLY_CONSUMPTION,
        })
    }
}

/// Parse, range-check and store one value typed by the user.
pub fn apply_validated<B: PreferencesBackend>(
    store: &SettingsStore<B>,
    field: ConfigField,
    input: &str,
) -> Result<f64, EngineError> {
    let value = parse_positive_decimal(input)?;
    validate_field(field, value)?;
    store.set(field, value)?;
    Ok(value)
}

/// Consumption entry flow of a front end: text in, result out, with the
/// accepted upper bound enforced.
///
/// Errors keep their precedence: unparseable text is a parse error, a value
/// <= 0 is `InvalidInput` from the engine, and only a positive value above
/// [`MAX_MONTHLY_CONSUMPTION`] is a `ValidationFailure`.
pub fn calculate_checked<B: PreferencesBackend>(
    service: &CalculationService<B>,
    input: &str,
) -> Result<CalculationResult, EngineError> {
    let result = service.calculate_from_text(input)?;
    validate_consumption(result.monthly_consumption())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::preferences::MemoryPreferences;
    use std::sync::Arc;

    fn create_test_service() -> CalculationService {
        CalculationService::new(Arc::new(SettingsStore::new(MemoryPreferences::new())))
    }

    #[test]
    fn test_defaults_are_within_range() {
        for field in ConfigField::ALL {
            assert!(validate_field(field, field.default_value()).is_ok(), "{} default out of range", field);
        }
    }

    #[test]
    fn test_bounds_are_exclusive_zero_inclusive_max() {
        assert!(validate_field(ConfigField::PanelArea, 0.0).is_err());
        assert!(validate_field(ConfigField::PanelArea, 100.0).is_ok());
        assert!(validate_field(ConfigField::PanelArea, 100.01).is_err());
        assert!(validate_field(ConfigField::ElectricityPrice, -1.0).is_err());
        assert!(validate_field(ConfigField::PanelInstalledCost, 100_000_000.0).is_ok());
        assert!(validate_field(ConfigField::PanelDailyOutput, f64::NAN).is_err());
    }

    #[test]
    fn test_consumption_range() {
        assert!(validate_consumption(450.0).is_ok());
        assert!(validate_consumption(100_000.0).is_ok());
        let err = validate_consumption(100_001.0).unwrap_err();
        assert!(matches!(err, EngineError::ValidationFailure { .. }));
        assert!(validate_consumption(0.0).is_err());
    }

    #[test]
    fn test_apply_validated_writes_only_good_values() {
        let store = SettingsStore::new(MemoryPreferences::new());
        assert_eq!(apply_validated(&store, ConfigField::ElectricityPrice, "850,5").unwrap(), 850.5);
        assert_eq!(store.get(ConfigField::ElectricityPrice), 850.5);

        assert!(matches!(
            apply_validated(&store, ConfigField::ElectricityPrice, "0"),
            Err(EngineError::ValidationFailure { .. })
        ));
        assert!(matches!(
            apply_validated(&store, ConfigField::ElectricityPrice, ""),
            Err(EngineError::Parse { .. })
        ));
        assert_eq!(store.get(ConfigField::ElectricityPrice), 850.5);
    }

    #[test]
    fn test_calculate_checked_keeps_error_precedence() {
        let service = create_test_service();
        assert!(matches!(calculate_checked(&service, "abc"), Err(EngineError::Parse { .. })));
        assert!(matches!(calculate_checked(&service, "0"), Err(EngineError::InvalidInput(_))));
        assert!(matches!(calculate_checked(&service, "-10"), Err(EngineError::InvalidInput(_))));
        assert!(matches!(
            calculate_checked(&service, "100001"),
            Err(EngineError::ValidationFailure { .. })
        ));
    }

    #[test]
    fn test_calculate_checked_accepts_comma_input() {
        let service = create_test_service();
        let result = calculate_checked(&service, "450,5").unwrap();
        assert_eq!(result.monthly_consumption(), 450.5);
        assert_eq!(result.panel_count(), 7);
        assert!(calculate_checked(&service, "100000").is_ok());
    }
}
