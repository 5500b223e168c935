// Engine services: the calculation itself plus the caller-layer helpers around it.
pub mod report;
pub mod solar_calculator;
pub mod validation;
