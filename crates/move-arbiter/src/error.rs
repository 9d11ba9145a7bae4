//! Reasons a move suggestion could not be obtained.
//!
//! None of these reach the caller of the arbitrator; each one ends in the
//! fallback path.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No completion API key configured")]
    ConfigurationAbsent,

    #[error("Request error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No move token in response: {0:?}")]
    NoMoveToken(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
