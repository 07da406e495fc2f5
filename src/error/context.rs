//! Error context attached to load failures.

use std::fmt;

use chrono::{DateTime, Utc};

/// Metadata about when and where an error occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `load_hotspots`.
    pub operation: String,

    /// Language session the failure belongs to.
    pub language: Option<String>,

    pub timestamp: DateTime<Utc>,

    /// Attempts made before giving up.
    pub attempts: u32,

    pub url: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            language: None,
            timestamp: Utc::now(),
            attempts: 0,
            url: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation={}", self.operation)?;
        if let Some(ref language) = self.language {
            write!(f, ", language={}", language)?;
        }
        if self.attempts > 0 {
            write!(f, ", attempts={}", self.attempts)?;
        }
        if let Some(ref url) = self.url {
            write!(f, ", url={}", url)?;
        }
        Ok(())
    }
}
