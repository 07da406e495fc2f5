//! System-related error types.
//!
//! Filesystem access for the preference file and the offline data directory.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    FileNotFound { path: PathBuf },

    DirectoryNotFound { path: PathBuf },

    PermissionDenied { path: PathBuf, operation: String },

    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::DirectoryNotFound { path } => {
                format!("Directory not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied: cannot {} '{}'", operation, path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_NOTFOUND",
            SystemError::DirectoryNotFound { .. } => "E_SYS_NODIR",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::IoError { .. } => "E_SYS_IO",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(f, "{} '{}' failed: {}", operation, p.display(), message),
                None => write!(f, "{} failed: {}", operation, message),
            },
            other => write!(f, "{}", other.user_message()),
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(p)) => {
            if operation.contains("dir") {
                SystemError::DirectoryNotFound { path: p }
            } else {
                SystemError::FileNotFound { path: p }
            }
        }
        (ErrorKind::PermissionDenied, Some(p)) => SystemError::PermissionDenied {
            path: p,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
