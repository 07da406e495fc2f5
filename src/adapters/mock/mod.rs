//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with queued and fixed responses
//! - [`MockClock`] - records backoff sleeps, fixed date
//! - [`MockImageSource`] - scripted image preload outcome
//! - [`InMemoryPreferences`] - in-memory preference storage

pub mod clock;
pub mod http;
pub mod image;
pub mod preferences;

pub use clock::MockClock;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use image::MockImageSource;
pub use preferences::InMemoryPreferences;
