//! Error Types
//!
//! Form validation, workflow task and configuration errors.

use thiserror::Error;

/// User-input validation failure, shown inline next to the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{name}: only {allowed} files are allowed")]
    UnsupportedFileType { name: String, allowed: &'static str },

    #[error("{name} is larger than {limit}")]
    FileTooLarge { name: String, limit: String },

    #[error("Please upload at least one file")]
    NoFiles,

    #[error("Please select a category")]
    MissingCategory,

    #[error("Please provide a description")]
    MissingDescription,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failure of a simulated workflow task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("cancelled")]
    Cancelled,

    #[error("{0}")]
    Step(String),

    #[error("cannot move task from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("unknown step `{0}`")]
    UnknownStep(String),
}

/// Rejected configuration override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("relevance thresholds out of order (low {low} > high {high})")]
    Thresholds { low: f64, high: f64 },
}

/// Browser refused to build the download link
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("no document available")]
    NoDocument,

    #[error("dom error: {0}")]
    Dom(String),
}
