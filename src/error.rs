//! Error types for the generator frontend.
//!
//! Both kinds are reported to the diagnostic sink and never surface in the UI.

use thiserror::Error;

/// Listing request failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("listing request failed: {0}")]
    Transport(String),

    #[error("listing service returned HTTP {0}")]
    Status(u16),

    #[error("listing payload could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Creation form failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("generator name is empty")]
    EmptyName,

    #[error("creation request failed: {0}")]
    Transport(String),

    #[error("creation service returned HTTP {0}")]
    Status(u16),

    #[error("created item could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SubmissionError::Status(status.as_u16())
        } else if err.is_decode() {
            SubmissionError::Decode(err.to_string())
        } else {
            SubmissionError::Transport(err.to_string())
        }
    }
}
