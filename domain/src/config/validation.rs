//! Structured configuration issues.
//!
//! Validation never aborts loading; it collects issues with a severity so the
//! caller can decide whether to warn or refuse to start.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required field is unset or blank.
    MissingValue { field: String },
    /// A field is set to a value that cannot be used.
    InvalidValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn missing(field: &str, severity: Severity) -> Self {
        Self {
            severity,
            code: ConfigIssueCode::MissingValue {
                field: field.to_string(),
            },
            message: format!("{} is not set", field),
        }
    }

    pub fn invalid(field: &str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidValue {
                field: field.to_string(),
                value: value.into(),
            },
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
