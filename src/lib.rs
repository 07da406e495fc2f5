//! hotspot-map - geometry, data loading and presentation model for
//! interactive hotspot images.
//!
//! The library is driven by [`context::HotspotContext`]; the binary wraps
//! the offline validator and a one-shot fetch in a small CLI.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod models;
pub mod presentation;
pub mod schema;
pub mod traits;
