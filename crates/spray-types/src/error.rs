//! Error types for spray-calculator

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::InputField;

/// Why a single input field was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Nothing was entered
    Empty,
    /// Text is not a decimal number
    NotANumber,
    /// Parsed, but infinite or NaN
    NotFinite,
    /// Must be zero or greater
    Negative,
    /// Must be strictly greater than zero
    NotPositive,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Empty => write!(f, "empty"),
            IssueKind::NotANumber => write!(f, "not a number"),
            IssueKind::NotFinite => write!(f, "not a finite number"),
            IssueKind::Negative => write!(f, "must not be negative"),
            IssueKind::NotPositive => write!(f, "must be greater than zero"),
        }
    }
}

/// A rejected field together with the reason
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: InputField,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(field: InputField, kind: IssueKind) -> Self {
        Self { field, kind }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.field, self.kind)
    }
}

/// Input rejected at the text-field boundary, before any calculation runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {}", format_issues(.issues))]
pub struct InvalidInputError {
    pub issues: Vec<FieldIssue>,
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl InvalidInputError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn single(field: InputField, kind: IssueKind) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, kind)],
        }
    }

    /// Fields to flag for correction, in form order, without duplicates
    pub fn fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|f| self.issues.iter().any(|i| i.field == *f))
            .collect()
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveError(err.to_string())
    }
}

/// History and favorites store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No record with id {0}")]
    NotFound(String),

    #[error("Id prefix {0} matches more than one record")]
    Ambiguous(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;
