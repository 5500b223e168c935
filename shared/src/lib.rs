pub mod models;
pub mod utils;

pub use models::{ConfigField, Configuration};
pub use utils::decimal_input::{is_valid_positive_number, parse_positive_decimal, ParseError};
