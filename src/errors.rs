use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for domain, storage, and network layers.
///
/// Reads are deliberately forgiving (missing files become empty collections,
/// malformed records are dropped at the parse boundary); the variants below
/// cover the failures that must surface, chiefly failed writes and unreachable
/// services.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

pub type Result<T> = StdResult<T, HubError>;

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<csv::Error> for HubError {
    fn from(err: csv::Error) -> Self {
        HubError::Storage(err.to_string())
    }
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        HubError::ServiceUnavailable(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] HubError),
    #[error("Input error: {0}")]
    Input(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Input(err.to_string())
    }
}
