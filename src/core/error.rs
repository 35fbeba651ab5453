use rmcp::model::{ErrorCode, ErrorData};
use std::fmt;
use thiserror::Error;

/// A single failed argument check, rendered as `<path>: <reason>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

/// Every violation found while validating one call, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentErrors(pub Vec<FieldViolation>);

impl ArgumentErrors {
    /// The call carried no arguments object at all.
    pub fn missing_object() -> Self {
        Self(vec![FieldViolation::new("", "Arguments are required")])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.path == field)
    }
}

impl fmt::Display for ArgumentErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(ArgumentErrors),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Snyk API error: {status_text}")]
    Upstream {
        status: reqwest::StatusCode,
        status_text: String,
    },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ScanError {
    pub fn upstream(status: reqwest::StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string());
        ScanError::Upstream {
            status,
            status_text,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ScanError::InvalidArguments(_) => ErrorCode::INVALID_PARAMS,
            ScanError::UnknownTool(_) => ErrorCode::METHOD_NOT_FOUND,
            ScanError::Upstream { .. } | ScanError::Transport(_) => ErrorCode::INTERNAL_ERROR,
        }
    }
}

impl From<ArgumentErrors> for ScanError {
    fn from(errors: ArgumentErrors) -> Self {
        ScanError::InvalidArguments(errors)
    }
}

impl From<ScanError> for ErrorData {
    fn from(err: ScanError) -> Self {
        ErrorData::new(err.error_code(), err.to_string(), None)
    }
}
