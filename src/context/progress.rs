//! Loading progress.
//!
//! Data progress moves through fixed checkpoints and never moves backwards
//! within one load session. The combined figure weights data at 60% and the
//! background image at 40%.

use super::state::{ImageStatus, LoadStatus};

pub const REQUEST_ISSUED: f64 = 0.2;
pub const RESPONSE_PARSED: f64 = 0.8;
pub const DONE: f64 = 1.0;

const DATA_WEIGHT: f64 = 0.6;
const IMAGE_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DataProgress(f64);

impl DataProgress {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Move forward to `checkpoint`; lower values are ignored.
    pub fn advance(&mut self, checkpoint: f64) {
        self.0 = self.0.max(checkpoint.clamp(0.0, DONE));
    }

    pub fn complete(&mut self) {
        self.0 = DONE;
    }

    /// Start of a new session, or a terminal failure.
    pub fn reset(&mut self) {
        self.0 = 0.0;
    }
}

/// Single user-facing progress value in `[0, 1]`.
///
/// Exactly 1 once the data is ready and the image has loaded.
pub fn combined_progress(status: LoadStatus, data: DataProgress, image: ImageStatus) -> f64 {
    let image_loaded = image == ImageStatus::Loaded;
    if status == LoadStatus::Ready && image_loaded {
        return DONE;
    }
    let image_part = if image_loaded { IMAGE_WEIGHT } else { 0.0 };
    (data.value() * DATA_WEIGHT + image_part).min(DONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_never_regresses() {
        let mut p = DataProgress::default();
        p.advance(RESPONSE_PARSED);
        p.advance(REQUEST_ISSUED);
        assert_eq!(p.value(), RESPONSE_PARSED);
        p.advance(5.0);
        assert_eq!(p.value(), DONE);
    }

    #[test]
    fn test_combined_weights() {
        let mut p = DataProgress::default();
        p.advance(REQUEST_ISSUED);
        let v = combined_progress(LoadStatus::Loading, p, ImageStatus::Loading);
        assert!((v - 0.12).abs() < 1e-9);

        let v = combined_progress(LoadStatus::Loading, p, ImageStatus::Loaded);
        assert!((v - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_combined_is_one_only_when_both_done() {
        let mut p = DataProgress::default();
        p.complete();
        assert_eq!(combined_progress(LoadStatus::Ready, p, ImageStatus::Loaded), 1.0);
        assert!((combined_progress(LoadStatus::Ready, p, ImageStatus::Loading) - 0.6).abs() < 1e-9);
        assert!((combined_progress(LoadStatus::Ready, p, ImageStatus::Error) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_combined_never_exceeds_one() {
        let mut p = DataProgress::default();
        p.complete();
        for status in [LoadStatus::Idle, LoadStatus::Loading, LoadStatus::Ready, LoadStatus::Error] {
            for image in [ImageStatus::Idle, ImageStatus::Loading, ImageStatus::Loaded, ImageStatus::Error] {
                assert!(combined_progress(status, p, image) <= 1.0);
            }
        }
    }
}
