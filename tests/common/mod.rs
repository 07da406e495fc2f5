//! Common test utilities for integration tests.
//!
//! Fixtures for valid data files and a context builder preloaded with
//! mock dependencies.
//!
//! # Example
//!
//! ```ignore
//! use common::{data_file_body, TestContextBuilder};
//!
//! let harness = TestContextBuilder::new().build();
//! harness.http.set_response(&data_prefix("en"), MockResponse::json(data_file_body("en")));
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use serde_json::{json, Value};

use hotspot_map::config::HotspotConfig;
use hotspot_map::context::HotspotContext;
use hotspot_map::i18n::Language;

pub const BASE_URL: &str = "http://hotspots.test/";

/// Data URL without the cache buster, for prefix-matched mock responses.
pub fn data_prefix(lang: &str) -> String {
    format!("http://hotspots.test/data/hotspots.{}.json", lang)
}

/// One hotspot record. Shapes rotate through circle, rectangle and polygon.
pub fn hotspot_json(index: usize, lang: &str) -> Value {
    let shape = match index % 3 {
        0 => json!({ "type": "circle", "radius": 3 }),
        1 => json!({ "type": "rectangle", "width": 8, "height": 6, "borderRadius": 4 }),
        _ => json!({
            "type": "polygon",
            "points": [{ "x": 0, "y": 0 }, { "x": 6, "y": 0 }, { "x": 3, "y": 5 }]
        }),
    };
    json!({
        "id": format!("zone-{}", index),
        "title": format!("[{}] Zone {}", lang, index),
        "description": format!("Safety tips for zone {}.", index),
        "ariaLabel": format!("Open zone {} details", index),
        "coords": {
            "default": { "anchor": "center", "x": 5 + index * 7, "y": 50 },
            "md": { "anchor": "center", "x": 5 + index * 7, "y": 45 }
        },
        "shape": shape,
        "categories": ["ergonomics", "environment"],
        "severity": "medium",
        "links": [{ "label": "Guide", "href": format!("https://example.org/zone-{}", index) }]
    })
}

pub fn data_file_json(lang: &str, count: usize) -> Value {
    json!({
        "language": lang,
        "updatedAt": "2025-02-11",
        "hotspots": (0..count).map(|i| hotspot_json(i, lang)).collect::<Vec<_>>()
    })
}

/// Body of a valid 12-hotspot data file.
pub fn data_file_body(lang: &str) -> String {
    data_file_json(lang, 12).to_string()
}

pub fn test_config() -> HotspotConfig {
    HotspotConfig::default().with_base_url(BASE_URL)
}

/// Context plus handles to every mock it was built with.
pub struct TestContext {
    pub ctx: HotspotContext,
    pub http: MockHttpClient,
    pub clock: MockClock,
    pub image: MockImageSource,
    pub prefs: InMemoryPreferences,
}

/// Builder for a [`HotspotContext`] wired to mocks.
pub struct TestContextBuilder {
    config: HotspotConfig,
    http: MockHttpClient,
    clock: MockClock,
    image: MockImageSource,
    prefs: InMemoryPreferences,
    language: Language,
}

impl TestContextBuilder {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            http: MockHttpClient::new(),
            clock: MockClock::default(),
            image: MockImageSource::loaded(),
            prefs: InMemoryPreferences::new(),
            language: Language::En,
        }
    }

    pub fn with_config(mut self, config: HotspotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = http;
        self
    }

    pub fn with_clock(mut self, clock: MockClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_image(mut self, image: MockImageSource) -> Self {
        self.image = image;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn build(self) -> TestContext {
        let ctx = HotspotContext::builder(self.config)
            .with_http_client(Arc::new(self.http.clone()))
            .with_clock(Arc::new(self.clock.clone()))
            .with_image_source(Arc::new(self.image.clone()))
            .with_preferences(Arc::new(self.prefs.clone()))
            .with_language(self.language)
            .build();
        TestContext {
            ctx,
            http: self.http,
            clock: self.clock,
            image: self.image,
            prefs: self.prefs,
        }
    }
}

impl Default for TestContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
