//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET for data files and images
//! - [`Clock`] - backoff timers and the cache-busting date
//! - [`ImageSource`] - out-of-band image preload
//! - [`PreferenceStore`] - persisted language preference

pub mod clock;
pub mod http;
pub mod image;
pub mod preferences;

pub use clock::Clock;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use image::ImageSource;
pub use preferences::{PreferenceError, PreferenceStore};
