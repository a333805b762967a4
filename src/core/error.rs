//! Typed error handling for the sift pipeline
//!
//! Normal pipeline operation has no error conditions: over-constrained
//! criteria produce an empty result, not an error, and absent record fields
//! are treated as non-matching. Errors arise only at the edges — parsing
//! untyped criteria, loading view configuration, and validating bundled
//! datasets — and each edge has its own category here so callers can match
//! specifically instead of handling a generic error.

use serde::Serialize;
use thiserror::Error;

/// The main error type for the sift crate
#[derive(Debug, Error)]
pub enum SiftError {
    /// Criteria-related errors (parsing and strict validation)
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// View configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Bundled dataset integrity errors
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SiftError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SiftError::Criteria(e) => e.error_code(),
            SiftError::Config(e) => e.error_code(),
            SiftError::Dataset(_) => "DATASET_ERROR",
            SiftError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Errors related to filter criteria
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// A selector or sort names a field outside the record's declared schema
    #[error("Unknown field '{field}' for collection '{collection}'")]
    UnknownField { field: String, collection: String },

    /// A sort expression could not be parsed
    #[error("Invalid sort expression '{expr}' (expected 'field', 'field:asc' or 'field:desc')")]
    InvalidSortExpression { expr: String },

    /// The filters parameter was not a JSON object of scalar values
    #[error("Invalid filters: {message}")]
    InvalidFilterJson { message: String },
}

impl CriteriaError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CriteriaError::UnknownField { .. } => "UNKNOWN_FIELD",
            CriteriaError::InvalidSortExpression { .. } => "INVALID_SORT_EXPRESSION",
            CriteriaError::InvalidFilterJson { .. } => "INVALID_FILTER_JSON",
        }
    }
}

/// Errors related to view configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    #[error("Failed to parse config{}: {message}", file.as_deref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Missing required field in configuration
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

/// Errors related to bundled dataset integrity
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A record field does not match its declared format
    #[error("Record field '{field}' in collection '{collection}' has invalid value '{value}'")]
    InvalidFieldFormat {
        collection: String,
        field: String,
        value: String,
    },
}

/// A single field validation failure, serializable for display layers
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        SiftError::Criteria(CriteriaError::InvalidFilterJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for SiftError {
    fn from(err: serde_yaml::Error) -> Self {
        SiftError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        SiftError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error for callers composing with anyhow
impl From<anyhow::Error> for SiftError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<SiftError>() {
            Ok(sift_err) => sift_err,
            Err(other) => SiftError::Internal(other.to_string()),
        }
    }
}

/// A specialized Result type for sift operations
pub type SiftResult<T> = Result<T, SiftError>;
