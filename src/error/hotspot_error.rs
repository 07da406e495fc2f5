//! Unified error type for hotspot-map.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::image::ImageLoadError;
use super::network::NetworkError;
use super::system::SystemError;
use super::validation::{ConsistencyError, ValidationError};

/// Unified error type.
///
/// Validation and exhausted network failures become the single user-facing
/// `error` status. Image failures are reported separately and never block
/// hotspot interaction. `Cancelled` is never shown to the user.
#[derive(Debug)]
pub enum HotspotError {
    Validation(ValidationError),

    Consistency(ConsistencyError),

    Network(NetworkError),

    Image(ImageLoadError),

    System(SystemError),

    /// Unsupported language or bad CLI input.
    Unsupported { message: String },

    /// Invalid base URL or other settings.
    Config { message: String },

    /// A superseded load; silently discarded.
    Cancelled,

    WithContext {
        error: Box<HotspotError>,
        context: ErrorContext,
    },
}

impl HotspotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HotspotError::Validation(_) | HotspotError::Consistency(_) => ErrorCategory::Data,
            HotspotError::Network(err) => {
                if err.is_server_side() {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Network
                }
            }
            HotspotError::Image(_) => ErrorCategory::Data,
            HotspotError::System(_) => ErrorCategory::System,
            HotspotError::Unsupported { .. } => ErrorCategory::User,
            HotspotError::Config { .. } => ErrorCategory::Configuration,
            HotspotError::Cancelled => ErrorCategory::Network,
            HotspotError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            HotspotError::Network(err) => err.is_retryable(),
            HotspotError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// True for errors that must never reach the UI.
    pub fn is_cancellation(&self) -> bool {
        match self {
            HotspotError::Cancelled => true,
            HotspotError::Network(NetworkError::Cancelled) => true,
            HotspotError::Image(ImageLoadError::Cancelled) => true,
            HotspotError::WithContext { error, .. } => error.is_cancellation(),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            HotspotError::Validation(err) => err.user_message(),
            HotspotError::Consistency(err) => err.to_string(),
            HotspotError::Network(err) => err.user_message(),
            HotspotError::Image(err) => err.user_message(),
            HotspotError::System(err) => err.user_message(),
            HotspotError::Unsupported { message } => message.clone(),
            HotspotError::Config { message } => format!("Configuration error: {}", message),
            HotspotError::Cancelled => "The request was cancelled.".to_string(),
            HotspotError::WithContext { error, .. } => error.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            HotspotError::Validation(err) => err.error_code(),
            HotspotError::Consistency(_) => "E_DATA_INCONSISTENT",
            HotspotError::Network(err) => err.error_code(),
            HotspotError::Image(err) => err.error_code(),
            HotspotError::System(err) => err.error_code(),
            HotspotError::Unsupported { .. } => "E_USER_UNSUPPORTED",
            HotspotError::Config { .. } => "E_CONFIG",
            HotspotError::Cancelled => "E_CANCELLED",
            HotspotError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        HotspotError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            HotspotError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The error without any attached context.
    pub fn inner(&self) -> &HotspotError {
        match self {
            HotspotError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for HotspotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotspotError::Validation(err) => write!(f, "{}", err),
            HotspotError::Consistency(err) => write!(f, "{}", err),
            HotspotError::Network(err) => write!(f, "{}", err),
            HotspotError::Image(err) => write!(f, "{}", err),
            HotspotError::System(err) => write!(f, "{}", err),
            HotspotError::Unsupported { message } => write!(f, "{}", message),
            HotspotError::Config { message } => write!(f, "Invalid configuration: {}", message),
            HotspotError::Cancelled => write!(f, "Cancelled"),
            HotspotError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for HotspotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HotspotError::Validation(err) => Some(err),
            HotspotError::Consistency(err) => Some(err),
            HotspotError::Network(err) => Some(err),
            HotspotError::Image(err) => Some(err),
            HotspotError::System(err) => Some(err),
            HotspotError::Unsupported { .. }
            | HotspotError::Config { .. }
            | HotspotError::Cancelled => None,
            HotspotError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ValidationError> for HotspotError {
    fn from(err: ValidationError) -> Self {
        HotspotError::Validation(err)
    }
}

impl From<ConsistencyError> for HotspotError {
    fn from(err: ConsistencyError) -> Self {
        HotspotError::Consistency(err)
    }
}

impl From<NetworkError> for HotspotError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::Cancelled => HotspotError::Cancelled,
            other => HotspotError::Network(other),
        }
    }
}

impl From<ImageLoadError> for HotspotError {
    fn from(err: ImageLoadError) -> Self {
        HotspotError::Image(err)
    }
}

impl From<SystemError> for HotspotError {
    fn from(err: SystemError) -> Self {
        HotspotError::System(err)
    }
}

impl From<std::io::Error> for HotspotError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        HotspotError::System(classify_io_error(err, None, "I/O operation"))
    }
}
