// Flat key -> number persistence used by the settings store.
use crate::error::EngineError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::str::FromStr;

/// Persistent key-value mechanism behind [`crate::config::settings::SettingsStore`].
///
/// Reads never fail: a missing key yields `default`. Writes and clears are
/// durable when they return `Ok` and must surface backend failures instead of
/// dropping the write.
pub trait PreferencesBackend: Send + Sync {
    fn read_numeric(&self, key: &str, default: f64) -> f64;
    fn write_numeric(&self, key: &str, value: f64) -> Result<(), EngineError>;
    fn clear_all(&self) -> Result<(), EngineError>;
}

/// How values are kept in the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoragePrecision {
    #[default]
    Full,
    /// Narrow every value to `f32` on the way in, like stores written by the
    /// older app did. Only needed to reproduce values migrated from them.
    Float32,
}

impl StoragePrecision {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            StoragePrecision::Full => value,
            StoragePrecision::Float32 => value as f32 as f64,
        }
    }
}

impl FromStr for StoragePrecision {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "f64" => Ok(StoragePrecision::Full),
            "float32" | "f32" => Ok(StoragePrecision::Float32),
            other => Err(EngineError::ConfigError(format!(
                "Unknown storage precision '{}'. Use 'full' or 'float32'.",
                other
            ))),
        }
    }
}

/// Process-local backend. Values live as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, f64>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        MemoryPreferences {
            values: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl PreferencesBackend for MemoryPreferences {
    fn read_numeric(&self, key: &str, default: f64) -> f64 {
        self.values.read().get(key).copied().unwrap_or(default)
    }

    fn write_numeric(&self, key: &str, value: f64) -> Result<(), EngineError> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    fn clear_all(&self) -> Result<(), EngineError> {
        self.values.write().clear();
        Ok(())
    }
}
