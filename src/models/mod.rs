//! Hotspot data model shared by the validator, geometry engine and loader.

mod hotspot;

pub use hotspot::*;
