//! `hotspot-map layout`

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{classify_io_error, HotspotResult};
use crate::geometry::{compute_marker_layout, MarkerLayout, Size};
use crate::schema::parse_data_file;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotLayout {
    pub id: String,
    pub layout: Option<MarkerLayout>,
}

/// Layout of every hotspot in `file` for a `width` x `height` container.
pub fn handle_layout_command(file: &Path, width: f64, height: f64) -> HotspotResult<Vec<HotspotLayout>> {
    let bytes = fs::read(file).map_err(|e| classify_io_error(e, Some(file.to_path_buf()), "read"))?;
    let data = parse_data_file(&bytes)?;
    let container = Size::new(width, height);

    Ok(data
        .hotspots
        .iter()
        .map(|h| HotspotLayout {
            id: h.id.clone(),
            layout: compute_marker_layout(h, container),
        })
        .collect())
}
