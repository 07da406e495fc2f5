//! Mock implementations for test fixtures.
//!
//! Re-exports the doubles from `hotspot_map::adapters::mock` and adds
//! canned HTTP configurations.

pub use hotspot_map::adapters::mock::{
    InMemoryPreferences, MockClock, MockHttpClient, MockImageSource, MockResponse,
};
pub use hotspot_map::traits::{HttpError, Response};

use super::{data_file_body, data_prefix};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Serve a valid data file for `lang`.
    pub fn with_data_file(self, lang: &str) -> Self {
        self.client
            .set_response(&data_prefix(lang), MockResponse::json(data_file_body(lang)));
        self
    }

    /// Fail the next request for `lang` with `status`.
    pub fn with_failure(self, lang: &str, status: u16) -> Self {
        self.client
            .push_response(&data_prefix(lang), MockResponse::status(status));
        self
    }

    /// Fail every request for `lang` with `status`.
    #[allow(dead_code)]
    pub fn always_failing(self, lang: &str, status: u16) -> Self {
        self.client
            .set_response(&data_prefix(lang), MockResponse::status(status));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
