//! Load status and the state record the context owns.

use serde::Serialize;
use std::fmt;

use crate::models::Hotspot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Ready => "ready",
            LoadStatus::Error => "error",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

impl ImageStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ImageStatus::Loaded | ImageStatus::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStatus::Idle => "idle",
            ImageStatus::Loading => "loading",
            ImageStatus::Loaded => "loaded",
            ImageStatus::Error => "error",
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hotspot list plus load status. Every transition returns a new value;
/// fields are never patched individually from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotState {
    pub hotspots: Vec<Hotspot>,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub updated_at: Option<String>,
}

impl HotspotState {
    /// State seeded with already-loaded data.
    pub fn seeded(hotspots: Vec<Hotspot>, updated_at: Option<String>) -> Self {
        Self::default().loaded(hotspots, updated_at)
    }

    /// Begin loading, keeping whatever is currently shown.
    pub fn loading(&self) -> Self {
        Self {
            hotspots: self.hotspots.clone(),
            status: LoadStatus::Loading,
            error: None,
            updated_at: self.updated_at.clone(),
        }
    }

    /// Begin loading from nothing (language switch).
    pub fn loading_fresh() -> Self {
        Self {
            status: LoadStatus::Loading,
            ..Self::default()
        }
    }

    pub fn loaded(&self, hotspots: Vec<Hotspot>, updated_at: Option<String>) -> Self {
        Self {
            hotspots,
            status: LoadStatus::Ready,
            error: None,
            updated_at,
        }
    }

    /// Terminal failure. No hotspot list survives.
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            hotspots: Vec::new(),
            status: LoadStatus::Error,
            error: Some(message.into()),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_keeps_current_list() {
        let state = HotspotState::seeded(Vec::new(), Some("2025-02-11".into()));
        let next = state.loading();
        assert_eq!(next.status, LoadStatus::Loading);
        assert_eq!(next.updated_at.as_deref(), Some("2025-02-11"));
        assert!(next.error.is_none());
    }

    #[test]
    fn test_failed_clears_everything_but_the_message() {
        let state = HotspotState::seeded(Vec::new(), Some("2025-02-11".into()));
        let failed = state.loading().failed("Unable to load hotspots (500)");
        assert_eq!(failed.status, LoadStatus::Error);
        assert!(failed.hotspots.is_empty());
        assert!(failed.updated_at.is_none());
        assert_eq!(failed.error.as_deref(), Some("Unable to load hotspots (500)"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LoadStatus::Ready).unwrap(), "\"ready\"");
        assert_eq!(serde_json::to_string(&ImageStatus::Loaded).unwrap(), "\"loaded\"");
        assert!(ImageStatus::Error.is_terminal());
        assert!(!ImageStatus::Loading.is_terminal());
    }
}
