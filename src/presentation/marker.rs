//! Interactive hotspot markers.

use serde::Serialize;

use crate::geometry::{compute_marker_layout, MarkerLayout, Size};
use crate::models::{Hotspot, Severity, Shape};

use super::Key;

/// Corner radius for rectangles that do not set one.
pub const DEFAULT_RECT_RADIUS: f64 = 12.0;

/// Corner radius that renders as a circle.
pub const CIRCLE_RADIUS: f64 = 9999.0;

/// Everything needed to render one marker button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerModel {
    pub hotspot_id: String,
    /// Focus target id of the button
    pub focus_id: String,
    pub aria_label: String,
    /// Visually hidden text content
    pub title: String,
    pub aria_controls: String,
    pub aria_expanded: bool,
    pub aria_pressed: bool,
    pub layout: MarkerLayout,
    pub border_radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

pub fn marker_focus_id(hotspot_id: &str) -> String {
    format!("marker-{}", hotspot_id)
}

impl MarkerModel {
    /// `None` while the container is unmeasured.
    pub fn build(hotspot: &Hotspot, container: Size, active: bool, dialog_id: &str) -> Option<Self> {
        let layout = compute_marker_layout(hotspot, container)?;
        let border_radius = match &hotspot.shape {
            Shape::Circle { .. } => CIRCLE_RADIUS,
            Shape::Rectangle { border_radius, .. } => border_radius.unwrap_or(DEFAULT_RECT_RADIUS),
            Shape::Polygon { .. } => DEFAULT_RECT_RADIUS,
        };
        let clip_path = layout.clip_path.clone();

        Some(Self {
            hotspot_id: hotspot.id.clone(),
            focus_id: marker_focus_id(&hotspot.id),
            aria_label: hotspot.aria_label.clone(),
            title: hotspot.title.clone(),
            aria_controls: dialog_id.to_string(),
            aria_expanded: active,
            aria_pressed: active,
            layout,
            border_radius,
            clip_path,
            severity: hotspot.severity,
        })
    }

    /// New selection after activating this marker: the active marker
    /// deselects, any other marker selects itself.
    pub fn activate(&self) -> Option<String> {
        if self.aria_pressed {
            None
        } else {
            Some(self.hotspot_id.clone())
        }
    }

    /// Keyboard activation follows button semantics.
    pub fn handle_key(&self, key: Key) -> Option<Option<String>> {
        match key {
            Key::Enter | Key::Space => Some(self.activate()),
            _ => None,
        }
    }
}

/// Markers for every hotspot that has a layout, in data order.
pub fn build_markers(
    hotspots: &[Hotspot],
    container: Size,
    selected: Option<&str>,
    dialog_id: &str,
) -> Vec<MarkerModel> {
    hotspots
        .iter()
        .filter_map(|h| MarkerModel::build(h, container, selected == Some(h.id.as_str()), dialog_id))
        .collect()
}
