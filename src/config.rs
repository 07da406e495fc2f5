//! Runtime configuration.
//!
//! Use the builder methods to customize, or [`HotspotConfig::from_env`] to
//! pick up `HOTSPOTS_*` environment overrides.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::error::{HotspotError, HotspotResult};
use crate::i18n::{Language, DEFAULT_LANGUAGE};

pub const ENV_BASE_URL: &str = "HOTSPOTS_BASE_URL";
pub const ENV_DATA_DIR: &str = "HOTSPOTS_DATA_DIR";
pub const ENV_DEFAULT_LANG: &str = "HOTSPOTS_DEFAULT_LANG";

const DEFAULT_BASE_URL: &str = "http://localhost:5173/";
const DEFAULT_DATA_DIR: &str = "public/data";
const BACKGROUND_IMAGE_PATH: &str = "assets/hotspots/Background.png";

/// Configuration for the hotspot context and the CLI.
///
/// # Example
///
/// ```ignore
/// use hotspot_map::config::HotspotConfig;
///
/// let config = HotspotConfig::default()
///     .with_base_url("https://example.org/app/")
///     .with_max_retries(2);
/// ```
#[derive(Debug, Clone)]
pub struct HotspotConfig {
    /// Site root the data and image paths are resolved against
    pub base_url: String,
    /// Directory the offline validator reads (default: public/data)
    pub data_dir: PathBuf,
    /// Last-resort language when nothing is stored and the locale is unknown
    pub default_language: Language,
    /// Additional attempts after the first failure (default: 2)
    pub max_retries: u32,
    /// Backoff before retry n is `backoff_step * n` (default: 500ms)
    pub backoff_step: Duration,
    /// Per-request timeout for the production HTTP client
    pub request_timeout: Duration,
    /// Start loading as soon as the context is created
    pub fetch_on_mount: bool,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_language: DEFAULT_LANGUAGE,
            max_retries: 2,
            backoff_step: Duration::from_millis(500),
            request_timeout: Duration::from_secs(30),
            fetch_on_mount: true,
        }
    }
}

impl HotspotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_fetch_on_mount(mut self, fetch: bool) -> Self {
        self.fetch_on_mount = fetch;
        self
    }

    /// Defaults overridden by `HOTSPOTS_BASE_URL`, `HOTSPOTS_DATA_DIR` and
    /// `HOTSPOTS_DEFAULT_LANG`. An unsupported language is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            if !dir.trim().is_empty() {
                config = config.with_data_dir(dir.trim());
            }
        }
        if let Ok(lang) = std::env::var(ENV_DEFAULT_LANG) {
            match lang.parse::<Language>() {
                Ok(language) => config = config.with_default_language(language),
                Err(e) => warn!(value = %lang, error = %e, "ignoring {}", ENV_DEFAULT_LANG),
            }
        }

        config
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> HotspotResult<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| HotspotError::Config {
            message: format!("base URL '{}': {}", self.base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HotspotError::Config {
                message: format!("base URL '{}' must use http or https", self.base_url),
            });
        }
        Ok(())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Data endpoint without the cache buster.
    pub fn data_path(&self, language: Language) -> String {
        format!("{}/data/hotspots.{}.json", self.base(), language.code())
    }

    /// Data endpoint with the `v=<YYYY-MM-DD>` cache buster.
    pub fn data_url(&self, language: Language, date: chrono::NaiveDate) -> String {
        format!("{}?v={}", self.data_path(language), date.format("%Y-%m-%d"))
    }

    /// Background illustration URL.
    pub fn image_url(&self) -> String {
        format!("{}/{}", self.base(), BACKGROUND_IMAGE_PATH)
    }

    /// Wait before retry number `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }
}
