//! Text oracle abstraction
//!
//! An oracle turns a prompt into free text. It may be slow, rate limited or
//! absent; callers never depend on it for anything but narrative.

use std::future::Future;

use thiserror::Error;

/// Failure classes reported by an oracle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: HTTP {0}")]
    Server(u16),

    #[error("Request rejected: {0}")]
    Client(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Oracle not configured")]
    NotConfigured,

    #[error("Empty response")]
    EmptyResponse,
}

impl OracleError {
    /// Whether a retry can reasonably succeed
    pub fn is_transient(&self) -> bool {
        match self {
            OracleError::RateLimited | OracleError::Network(_) | OracleError::Timeout => true,
            OracleError::Server(status) => (500..600).contains(status),
            OracleError::Client(_) | OracleError::NotConfigured | OracleError::EmptyResponse => {
                false
            }
        }
    }

    /// Classify an HTTP status code
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            429 => OracleError::RateLimited,
            500..=599 => OracleError::Server(status),
            _ => OracleError::Client(format!("HTTP {}: {}", status, message)),
        }
    }
}

/// Something that can answer a prompt with text
pub trait TextOracle: Send + Sync {
    fn suggest(&self, prompt: &str) -> impl Future<Output = Result<String, OracleError>> + Send;

    /// `false` lets callers skip straight to local text
    fn is_configured(&self) -> bool {
        true
    }
}

/// The oracle used when none is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOracle;

impl TextOracle for NoOracle {
    async fn suggest(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
