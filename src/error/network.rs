//! Network-related error types.
//!
//! Failures of the data endpoint request, classified from the transport-level
//! [`HttpError`] or from a non-2xx status.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the host failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// Non-2xx response.
    HttpStatus { status: u16, message: String },

    /// Body could not be read.
    InvalidResponse { message: String },

    /// Request was cancelled before it completed.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Status failure for the hotspot endpoint.
    pub fn status(status: u16) -> Self {
        NetworkError::HttpStatus {
            status,
            message: "Unable to load hotspots".to_string(),
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => true,
        }
    }

    /// True when the host answered with a status rather than failing to connect.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status, .. } if *status >= 500)
    }

    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the data host. Please check your connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The request for hotspot data timed out.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "Hotspot data for this language was not found.".to_string(),
                500..=599 => {
                    "The data host is experiencing issues. Please try again later.".to_string()
                }
                _ => format!("The data host returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an unreadable response from the data host.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "{} ({})", message, status)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport error for `url`.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            url: url.to_string(),
        },
        HttpError::ServerError { status, .. } => NetworkError::status(status),
        HttpError::Cancelled => NetworkError::Cancelled,
        HttpError::Io(message) => NetworkError::InvalidResponse { message },
        HttpError::InvalidUrl(message) | HttpError::Other(message) => {
            NetworkError::Other { message }
        }
    }
}
