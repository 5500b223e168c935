use shared::models::ConfigField;
use shared::utils::decimal_input::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A calculation argument broke its precondition (e.g. consumption <= 0).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    /// Raised by the caller-layer range checks, never by the settings store itself.
    #[error("Validation failure: {field} = {value} is outside ({min}, {max}]")]
    ValidationFailure {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Preferences storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EngineError {
    pub fn out_of_range(field: ConfigField, value: f64, max: f64) -> Self {
        EngineError::ValidationFailure {
            field: field.key().to_string(),
            value,
            min: 0.0,
            max,
        }
    }

    /// True for failures caused by what the user typed; the caller should re-prompt.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_) | EngineError::Parse { .. } | EngineError::ValidationFailure { .. }
        )
    }
}
