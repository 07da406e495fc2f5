//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TokioClock`] - tokio timers and the UTC date
//! - [`HttpImageSource`] - image preload over HTTP with format sniffing
//! - [`FilePreferences`] - JSON file in the platform config directory
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every trait.

pub mod file_preferences;
pub mod http_image;
pub mod mock;
pub mod reqwest_http;
pub mod tokio_clock;

pub use file_preferences::FilePreferences;
pub use http_image::HttpImageSource;
pub use mock::{InMemoryPreferences, MockClock, MockHttpClient, MockImageSource};
pub use reqwest_http::ReqwestHttpClient;
pub use tokio_clock::TokioClock;
