//! Image loading abstraction used by the preload tracker.

use async_trait::async_trait;

use crate::error::ImageLoadError;

/// Loads an image resource out-of-band and reports whether it is usable.
///
/// Only the outcome is exposed, never the decoded bytes.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn load(&self, url: &str) -> Result<(), ImageLoadError>;
}
