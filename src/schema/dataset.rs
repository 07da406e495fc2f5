//! Offline validation of a directory of hotspot data files.
//!
//! Reads every `hotspots.<xx>.json` file, validates each against the schema
//! and then checks structural consistency across the translations. This is
//! the only part of the crate that reads data files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{
    classify_io_error, ConsistencyError, ErrorContext, HotspotResult, ResultExt, SystemError,
};

use super::consistency::{check_consistency, NamedDataFile};
use super::validator::parse_data_file;

static DATA_FILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^hotspots\.[a-z]{2}\.json$").expect("Invalid data file regex pattern")
});

/// Outcome of a successful directory check.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    pub directory: PathBuf,
    pub files: Vec<NamedDataFile>,
}

impl DatasetReport {
    pub fn languages(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.data.language.as_str()).collect()
    }

    pub fn hotspot_count(&self) -> usize {
        self.files.first().map(|f| f.data.hotspots.len()).unwrap_or(0)
    }
}

/// Whether `file_name` looks like a hotspot data file.
pub fn is_data_file_name(file_name: &str) -> bool {
    DATA_FILE_REGEX.is_match(file_name)
}

/// List data files in `dir`, sorted by name.
pub fn list_data_files(dir: &Path) -> HotspotResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| classify_io_error(e, Some(dir.to_path_buf()), "read dir"))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| classify_io_error(e, Some(dir.to_path_buf()), "read dir"))?;
        let name = entry.file_name();
        if name.to_str().map(is_data_file_name).unwrap_or(false) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read and validate one file.
pub fn load_data_file(path: &Path) -> HotspotResult<NamedDataFile> {
    let bytes = fs::read(path).map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read"))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let data = parse_data_file(&bytes)
        .with_context(|| ErrorContext::new(format!("validate {}", file_name)))?;
    debug!(file = %file_name, hotspots = data.hotspots.len(), "validated data file");
    Ok(NamedDataFile::new(file_name, data))
}

/// Validate every data file in `dir` and their cross-file consistency.
pub fn validate_directory(dir: &Path) -> HotspotResult<DatasetReport> {
    if !dir.is_dir() {
        return Err(SystemError::DirectoryNotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let paths = list_data_files(dir)?;
    if paths.is_empty() {
        return Err(ConsistencyError::NoFiles.into());
    }

    let files = paths
        .iter()
        .map(|path| load_data_file(path))
        .collect::<HotspotResult<Vec<_>>>()?;

    check_consistency(&files)?;
    info!(
        directory = %dir.display(),
        files = files.len(),
        "hotspot data validation succeeded"
    );

    Ok(DatasetReport {
        directory: dir.to_path_buf(),
        files,
    })
}
