//! In-memory preference store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{PreferenceError, PreferenceStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
    load_should_fail: Arc<Mutex<bool>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        prefs
    }

    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Direct read that bypasses failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(PreferenceError::LoadFailed("Simulated load failure".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PreferenceError::SaveFailed("Simulated save failure".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
