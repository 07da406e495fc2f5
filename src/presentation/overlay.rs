//! Loading overlay shown over the illustration until everything is ready.

use serde::Serialize;

use crate::context::{ImageStatus, LoadStatus};
use crate::i18n::Translations;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingOverlay {
    /// aria-busy on the workspace; markers ignore pointer input while set
    pub busy: bool,
    pub visible: bool,
    pub label: String,
    pub aria_label: String,
    /// Whole percent for the progress bar; `None` hides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u8>,
}

impl LoadingOverlay {
    pub fn build(status: LoadStatus, image: ImageStatus, progress: f64, t: &Translations) -> Self {
        let ready = status == LoadStatus::Ready && image == ImageStatus::Loaded;
        let label = if image == ImageStatus::Error {
            t.error_loading_image
        } else if status == LoadStatus::Loading {
            t.loading_data
        } else {
            t.loading_image
        };
        let progress_percent = (image != ImageStatus::Error)
            .then(|| (progress.clamp(0.0, 1.0) * 100.0).round() as u8);

        Self {
            busy: !ready,
            visible: !ready,
            label: label.to_string(),
            aria_label: t.indicator_label.to_string(),
            progress_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn t() -> &'static Translations {
        Translations::for_language(Language::En)
    }

    #[test]
    fn test_ready_hides_overlay() {
        let overlay = LoadingOverlay::build(LoadStatus::Ready, ImageStatus::Loaded, 1.0, t());
        assert!(!overlay.busy);
        assert!(!overlay.visible);
        assert_eq!(overlay.progress_percent, Some(100));
    }

    #[test]
    fn test_loading_label_and_progress() {
        let overlay = LoadingOverlay::build(LoadStatus::Loading, ImageStatus::Loading, 0.12, t());
        assert!(overlay.busy);
        assert_eq!(overlay.label, "Loading hotspots");
        assert_eq!(overlay.progress_percent, Some(12));
    }

    #[test]
    fn test_image_failure_hides_progress_bar() {
        let overlay = LoadingOverlay::build(LoadStatus::Ready, ImageStatus::Error, 0.6, t());
        assert!(overlay.busy);
        assert_eq!(overlay.label, t().error_loading_image);
        assert_eq!(overlay.progress_percent, None);
    }

    #[test]
    fn test_data_ready_waiting_for_image() {
        let overlay = LoadingOverlay::build(LoadStatus::Ready, ImageStatus::Loading, 0.6, t());
        assert_eq!(overlay.label, t().loading_image);
        assert_eq!(overlay.progress_percent, Some(60));
    }
}
