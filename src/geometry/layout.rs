//! Pixel layout of hotspot markers.
//!
//! Converts percentage-based shapes into a pixel bounding box (and a clip
//! path for polygons) for a measured container. Every box side is floored at
//! [`MIN_MARKER_SIZE`] so markers stay tappable on small containers.

use serde::{Deserialize, Serialize};

use crate::models::{Anchor, Coords, Hotspot, ResponsiveCoords, Shape};

use super::breakpoint::resolve_responsive_coords;

/// Smallest marker side, in pixels.
pub const MIN_MARKER_SIZE: f64 = 16.0;

/// Measured container size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero in either dimension means the container has not been measured.
    pub fn is_measured(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

/// Marker placement in pixels, relative to the container's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,
}

/// Origin of a hotspot in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelOrigin {
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
}

fn to_pixels(percent: f64, total: f64) -> f64 {
    (percent / 100.0) * total
}

/// Resolve `coords` for the container and convert to a pixel origin.
pub fn map_hotspot_coords_to_pixels(coords: &ResponsiveCoords, container: Size) -> PixelOrigin {
    let resolved = resolve_responsive_coords(coords, container.width);
    PixelOrigin {
        x: to_pixels(resolved.x.clamp(0.0, 100.0), container.width),
        y: to_pixels(resolved.y.clamp(0.0, 100.0), container.height),
        anchor: resolved.anchor,
    }
}

/// Compute the marker box for `hotspot`, or `None` for an unmeasured container.
pub fn compute_marker_layout(hotspot: &Hotspot, container: Size) -> Option<MarkerLayout> {
    if !container.is_measured() {
        return None;
    }

    let origin = map_hotspot_coords_to_pixels(&hotspot.coords, container);
    let centered = origin.anchor == Anchor::Center;

    let layout = match &hotspot.shape {
        Shape::Circle { radius } => {
            let radius_px = to_pixels(*radius, container.width);
            let size = (radius_px * 2.0).max(MIN_MARKER_SIZE);
            let (left, top) = if centered {
                (origin.x - radius_px, origin.y - radius_px)
            } else {
                (origin.x, origin.y)
            };
            MarkerLayout {
                left,
                top,
                width: size,
                height: size,
                clip_path: None,
            }
        }
        Shape::Rectangle { width, height, .. } => {
            let width = to_pixels(*width, container.width).max(MIN_MARKER_SIZE);
            let height = to_pixels(*height, container.height).max(MIN_MARKER_SIZE);
            let (left, top) = if centered {
                (origin.x - width / 2.0, origin.y - height / 2.0)
            } else {
                (origin.x, origin.y)
            };
            MarkerLayout {
                left,
                top,
                width,
                height,
                clip_path: None,
            }
        }
        Shape::Polygon { points } => {
            let absolute: Vec<(f64, f64)> = points
                .iter()
                .map(|p| {
                    (
                        origin.x + to_pixels(p.x, container.width),
                        origin.y + to_pixels(p.y, container.height),
                    )
                })
                .collect();

            let min_x = absolute.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
            let max_x = absolute.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
            let min_y = absolute.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let max_y = absolute.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
            let width = (max_x - min_x).max(MIN_MARKER_SIZE);
            let height = (max_y - min_y).max(MIN_MARKER_SIZE);

            let vertices = absolute
                .iter()
                .map(|(x, y)| {
                    format!(
                        "{:.2}% {:.2}%",
                        (x - min_x) / width * 100.0,
                        (y - min_y) / height * 100.0
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            MarkerLayout {
                left: min_x,
                top: min_y,
                width,
                height,
                clip_path: Some(format!("polygon({})", vertices)),
            }
        }
    };

    Some(layout)
}

/// Rescale coordinates resolved for `original` to a container of size `next`.
///
/// Callers decide when an aspect-ratio change warrants this; it is not meant
/// to run on every resize.
pub fn recalc_coords_for_aspect_ratio(coords: &ResponsiveCoords, original: Size, next: Size) -> Coords {
    let resolved = resolve_responsive_coords(coords, original.width);
    if !original.is_measured() {
        return resolved;
    }
    let scale_x = next.width / original.width;
    let scale_y = next.height / original.height;
    Coords {
        anchor: resolved.anchor,
        x: (resolved.x * scale_x).clamp(0.0, 100.0),
        y: (resolved.y * scale_y).clamp(0.0, 100.0),
    }
}
