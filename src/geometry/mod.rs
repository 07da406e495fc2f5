//! Geometry engine: responsive coordinate resolution and marker layout.
//!
//! Everything here is pure and synchronous; callers supply the measured
//! container size.

pub mod breakpoint;
pub mod layout;

pub use breakpoint::{resolve_breakpoint, resolve_responsive_coords};
pub use layout::{
    compute_marker_layout, map_hotspot_coords_to_pixels, recalc_coords_for_aspect_ratio,
    MarkerLayout, PixelOrigin, Size, MIN_MARKER_SIZE,
};
