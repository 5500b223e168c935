// Number text handling shared by every front end of the calculator.
// Input accepts either ',' or '.' as the decimal separator; display follows the
// decimal-comma convention ('.' groups thousands, ',' separates decimals).

pub mod decimal_input {
    use std::str::FromStr;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ParseError {
        #[error("empty value")]
        Empty,

        #[error("'{input}' is not a valid number")]
        InvalidNumber { input: String },
    }

    fn normalize(s: &str) -> String {
        s.trim().replace(',', ".")
    }

    /// Parses "450,5" or "450.5" into 450.5.
    ///
    /// Positivity is not checked here; callers that need it use
    /// [`is_valid_positive_number`] first or inspect the result. Grouping
    /// separators are not stripped, so "1.234,5" fails.
    pub fn parse_positive_decimal(s: &str) -> Result<f64, ParseError> {
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let value = f64::from_str(&normalize(s)).map_err(|_| ParseError::InvalidNumber {
            input: s.to_string(),
        })?;

        // "inf" and "NaN" are accepted by f64::from_str but are not decimal numbers.
        if !value.is_finite() {
            return Err(ParseError::InvalidNumber {
                input: s.to_string(),
            });
        }
        Ok(value)
    }

    /// Fails closed: blank, unparseable, non-finite and non-positive input all give `false`.
    pub fn is_valid_positive_number(s: &str) -> bool {
        matches!(parse_positive_decimal(s), Ok(value) if value > 0.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_accepts_both_separators() {
            assert_eq!(parse_positive_decimal("450,5").unwrap(), 450.5);
            assert_eq!(parse_positive_decimal("450.5").unwrap(), 450.5);
            assert_eq!(parse_positive_decimal("  0,1 ").unwrap(), 0.1);
        }

        #[test]
        fn test_parse_does_not_enforce_positivity() {
            assert_eq!(parse_positive_decimal("-5").unwrap(), -5.0);
            assert_eq!(parse_positive_decimal("0").unwrap(), 0.0);
        }

        #[test]
        fn test_parse_empty_and_blank() {
            assert_eq!(parse_positive_decimal(""), Err(ParseError::Empty));
            assert_eq!(parse_positive_decimal("   "), Err(ParseError::Empty));
        }

        #[test]
        fn test_parse_rejects_garbage_and_grouping() {
            assert!(matches!(parse_positive_decimal("abc"), Err(ParseError::InvalidNumber { .. })));
            assert!(matches!(parse_positive_decimal("1.234,56"), Err(ParseError::InvalidNumber { .. })));
            assert!(matches!(parse_positive_decimal("inf"), Err(ParseError::InvalidNumber { .. })));
            assert!(matches!(parse_positive_decimal("NaN"), Err(ParseError::InvalidNumber { .. })));
        }

        #[test]
        fn test_parse_error_keeps_original_input() {
            let err = parse_positive_decimal("12a").unwrap_err();
            assert_eq!(err.to_string(), "'12a' is not a valid number");
        }

        #[test]
        fn test_is_valid_positive_number() {
            for rejected in ["", " ", "0", "0,0", "-5", "abc", "1.000,5", "inf"] {
                assert!(!is_valid_positive_number(rejected), "expected '{}' to be rejected", rejected);
            }
            for accepted in ["450", "450,5", "0,1", "450.5", "2100000"] {
                assert!(is_valid_positive_number(accepted), "expected '{}' to be accepted", accepted);
            }
        }
    }
}

pub mod display_format {
    fn group_thousands(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Fixed decimals, ',' as separator, no grouping: 450.5 -> "450,50" with 2 decimals.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value, decimals = decimals);
        formatted.replace('.', ",")
    }

    /// Rounded to a whole amount with '.' grouping: 416700.0 -> "416.700".
    pub fn format_currency(value: f64) -> String {
        group_thousands(value.round() as i64)
    }

    pub fn format_integer(value: i64) -> String {
        group_thousands(value)
    }

    pub fn format_percentage(value: f64) -> String {
        format!("{}%", format_decimal(value, 1))
    }

    pub fn format_power(kilowatts: f64) -> String {
        format!("{} kW", format_decimal(kilowatts, 2))
    }

    pub fn format_area(square_meters: f64) -> String {
        format!("{} m²", format_integer(square_meters.round() as i64))
    }

    pub fn format_years(years: f64) -> String {
        format!("{} years", format_decimal(years, 1))
    }

    pub fn format_energy(kwh: f64) -> String {
        format!("{} kWh", format_decimal(kwh, 2))
    }

    /// "$417.000 COP"
    pub fn format_currency_full(value: f64) -> String {
        format!("${} COP", format_currency(value))
    }

}
