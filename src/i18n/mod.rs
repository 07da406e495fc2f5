//! Supported languages, initial language resolution and the persisted
//! language preference.

mod translations;

pub use translations::Translations;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::HotspotError;
use crate::traits::PreferenceStore;

/// Preference key holding the last selected language code.
pub const LANGUAGE_PREFERENCE_KEY: &str = "interactive-hotspots:language";

/// Used when neither the stored preference nor the system locale matches.
pub const DEFAULT_LANGUAGE: Language = Language::Lv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Lv,
}

impl Language {
    /// In language-switcher order.
    pub const ALL: [Language; 2] = [Language::Lv, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lv => "lv",
        }
    }

    /// Exact two-letter code lookup.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Match the leading two letters of a locale tag such as `en-US` or
    /// `lv_LV.UTF-8`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let prefix: String = locale.chars().take(2).collect();
        Self::from_code(&prefix.to_ascii_lowercase())
    }

    pub fn label(&self) -> &'static str {
        self.translations().language_label
    }

    pub fn translations(&self) -> &'static Translations {
        Translations::for_language(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = HotspotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(&s.trim().to_ascii_lowercase()).ok_or_else(|| {
            HotspotError::Unsupported {
                message: format!(
                    "Unsupported language '{}'. Supported: {}",
                    s,
                    Language::ALL.map(|l| l.code()).join(", ")
                ),
            }
        })
    }
}

/// Locale of the current process from `LC_ALL`, `LC_MESSAGES` or `LANG`.
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

/// Stored preference, then the system locale, then `fallback`.
///
/// A stored value that is not a supported code is ignored. Store failures
/// are logged and treated as "nothing stored".
pub fn resolve_initial_language(
    store: &dyn PreferenceStore,
    system_locale: Option<&str>,
    fallback: Language,
) -> Language {
    match store.get(LANGUAGE_PREFERENCE_KEY) {
        Ok(Some(stored)) => {
            if let Some(language) = Language::from_code(&stored) {
                debug!(language = %language, "using stored language preference");
                return language;
            }
            debug!(stored = %stored, "ignoring unsupported stored language");
        }
        Ok(None) => {}
        Err(e) => warn!(error = %e, "failed to read language preference"),
    }

    system_locale
        .and_then(Language::from_locale)
        .unwrap_or(fallback)
}

/// Language preference bound to a store.
#[derive(Clone)]
pub struct LanguagePreference {
    store: Arc<dyn PreferenceStore>,
}

impl LanguagePreference {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn initial(&self, system_locale: Option<&str>, fallback: Language) -> Language {
        resolve_initial_language(self.store.as_ref(), system_locale, fallback)
    }

    /// Write `language`. Failures are logged, never propagated.
    pub fn persist(&self, language: Language) {
        if let Err(e) = self.store.set(LANGUAGE_PREFERENCE_KEY, language.code()) {
            warn!(language = %language, error = %e, "failed to persist language preference");
        }
    }
}

impl fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguagePreference").finish_non_exhaustive()
    }
}
