//! `hotspot-map validate`

use std::path::PathBuf;

use crate::config::HotspotConfig;
use crate::error::HotspotResult;
use crate::schema::{validate_directory, DatasetReport};

/// Validate the data directory, falling back to the configured one.
pub fn handle_validate_command(config: &HotspotConfig, dir: Option<PathBuf>) -> HotspotResult<DatasetReport> {
    let dir = dir.unwrap_or_else(|| config.data_dir.clone());
    validate_directory(&dir)
}

pub fn format_report(report: &DatasetReport) -> String {
    format!(
        "Hotspot data validation succeeded: {} hotspots in {} ({})",
        report.hotspot_count(),
        report.directory.display(),
        report.languages().join(", ")
    )
}
