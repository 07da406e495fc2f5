//! JSON-file backed [`PreferenceStore`].
//!
//! Stored at `<config dir>/hotspot-map/preferences.json` as a flat
//! string-to-string object.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::traits::{PreferenceError, PreferenceStore};

const PREFERENCES_DIR: &str = "hotspot-map";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FilePreferences {
    /// Store under the platform config directory.
    pub fn new() -> Result<Self, PreferenceError> {
        let config_dir = dirs::config_dir().ok_or(PreferenceError::Unavailable)?;
        Ok(Self::with_path(
            config_dir.join(PREFERENCES_DIR).join(PREFERENCES_FILE),
        ))
    }

    /// Store in an explicit directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(PREFERENCES_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let file = File::open(&self.path).map_err(|e| PreferenceError::LoadFailed(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PreferenceError::Serialization(e.to_string()))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| PreferenceError::SaveFailed(e.to_string()))?;
            }
        }
        let file =
            File::create(&self.path).map_err(|e| PreferenceError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| PreferenceError::SaveFailed(e.to_string()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let _guard = self.lock.lock().map_err(|_| PreferenceError::Unavailable)?;
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().map_err(|_| PreferenceError::Unavailable)?;
        // a corrupt file is replaced rather than blocking every future write
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::in_dir(temp.path());
        assert_eq!(prefs.get("interactive-hotspots:language").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::with_path(temp.path().join("nested").join(PREFERENCES_FILE));
        prefs.set("interactive-hotspots:language", "en").unwrap();
        prefs.set("other", "1").unwrap();
        assert_eq!(
            prefs.get("interactive-hotspots:language").unwrap(),
            Some("en".to_string())
        );
        assert!(prefs.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_reported_then_replaced() {
        let temp = TempDir::new().unwrap();
        let prefs = FilePreferences::in_dir(temp.path());
        fs::write(prefs.path(), "not json").unwrap();
        assert!(matches!(
            prefs.get("k"),
            Err(PreferenceError::Serialization(_))
        ));
        prefs.set("k", "v").unwrap();
        assert_eq!(prefs.get("k").unwrap(), Some("v".to_string()));
    }
}
