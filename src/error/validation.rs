//! Data validation errors.

use std::fmt;

use thiserror::Error;

/// One rule violation at a field path such as `hotspots[3].coords.default.x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A hotspot data file failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hotspot data: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationIssue::new(path, message)])
    }

    /// Paths of every offending field, in discovery order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }

    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }

    pub fn user_message(&self) -> String {
        "The hotspot data is malformed and cannot be displayed.".to_string()
    }

    pub fn error_code(&self) -> &'static str {
        "E_DATA_INVALID"
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Two or more translations disagree structurally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("No hotspot data files were found")]
    NoFiles,

    #[error("File \"{file}\" contains {actual} hotspots, expected {expected}")]
    CountMismatch {
        file: String,
        actual: usize,
        expected: usize,
    },

    #[error("File \"{file}\" hotspot order mismatch at position {index}: expected \"{expected}\", received \"{received}\"")]
    OrderMismatch {
        file: String,
        index: usize,
        expected: String,
        received: String,
    },

    #[error("Hotspot \"{id}\" has inconsistent coordinates between languages ({baseline} vs {file})")]
    CoordsMismatch {
        id: String,
        baseline: String,
        file: String,
    },

    #[error("Hotspot \"{id}\" has inconsistent shape between languages ({baseline} vs {file})")]
    ShapeMismatch {
        id: String,
        baseline: String,
        file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_paths() {
        let err = ValidationError::new(vec![
            ValidationIssue::new("hotspots[0].coords.default.x", "must be <= 100"),
            ValidationIssue::new("hotspots", "must contain at least 12 items"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid hotspot data: hotspots[0].coords.default.x: must be <= 100; hotspots: must contain at least 12 items"
        );
        assert!(err.has_issue_at("hotspots"));
        assert_eq!(err.paths().len(), 2);
    }

    #[test]
    fn test_consistency_messages() {
        let err = ConsistencyError::CountMismatch {
            file: "hotspots.lv.json".into(),
            actual: 11,
            expected: 12,
        };
        assert_eq!(
            err.to_string(),
            "File \"hotspots.lv.json\" contains 11 hotspots, expected 12"
        );
    }
}
