//! Persisted user preference abstraction.
//!
//! A small string key-value store. The only key written today is the
//! selected language.

/// Preference storage errors.
#[derive(Debug, Clone)]
pub enum PreferenceError {
    /// Failed to read the store
    LoadFailed(String),
    /// Failed to write the store
    SaveFailed(String),
    /// Stored data could not be decoded
    Serialization(String),
    /// No location available for the store
    Unavailable,
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::LoadFailed(msg) => write!(f, "Failed to load preferences: {}", msg),
            PreferenceError::SaveFailed(msg) => write!(f, "Failed to save preferences: {}", msg),
            PreferenceError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            PreferenceError::Unavailable => write!(f, "Preference storage unavailable"),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Trait for persisted string preferences.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
