//! Background image preload errors.

use thiserror::Error;

/// The illustration could not be loaded. Terminal, never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    #[error("image request for '{url}' failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("image request for '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("'{url}' did not contain a recognizable image")]
    UnrecognizedFormat { url: String },

    #[error("image preload cancelled")]
    Cancelled,
}

impl ImageLoadError {
    pub fn user_message(&self) -> String {
        "We could not load the illustration. Refresh or check your connection.".to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ImageLoadError::Status { .. } => "E_IMG_STATUS",
            ImageLoadError::Transport { .. } => "E_IMG_TRANSPORT",
            ImageLoadError::UnrecognizedFormat { .. } => "E_IMG_FORMAT",
            ImageLoadError::Cancelled => "E_IMG_CANCEL",
        }
    }
}
