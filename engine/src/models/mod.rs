// Engine-specific data models.
// Configuration lives in `shared::models`; the result record is produced only by the engine.
pub mod calculation;

pub use calculation::CalculationResult;
