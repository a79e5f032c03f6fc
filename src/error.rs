//! Crate-wide error type and result alias

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A network or API failure during a fetch. Fatal to the surrounding
    /// pagination loop: no partial result is returned. `transient` marks the
    /// server-side error class that mutating calls are allowed to retry.
    #[error("fetch failed: {message}")]
    Fetch { message: String, transient: bool },

    /// A mutating call failed on every attempt of the bounded retry loop.
    #[error("request failed after {attempts} attempts")]
    RetryExhausted {
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    /// A malformed owner/resource or user argument. Raised before any
    /// network call is made.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The caller-supplied filter pattern is not a valid regex.
    #[error("invalid filter pattern")]
    Pattern(#[from] regex::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode API response")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// A non-retryable fetch failure.
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch {
            message: message.into(),
            transient: false,
        }
    }

    /// A transient server-side fetch failure (HTTP 5xx class), eligible for
    /// the bounded retry used by mutating commands.
    pub fn transient(message: impl Into<String>) -> Self {
        Error::Fetch {
            message: message.into(),
            transient: true,
        }
    }

    /// Retry predicate: transient-server errors may be retried, everything
    /// else propagates unretried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Fetch {
                transient: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(Error::transient("503 Service Unavailable").is_transient());
        assert!(!Error::fetch("404 Not Found").is_transient());
        assert!(!Error::InvalidReference("bad".to_string()).is_transient());
    }

    #[test]
    fn test_retry_exhausted_keeps_source() {
        let err = Error::RetryExhausted {
            attempts: 3,
            source: Box::new(Error::transient("500")),
        };
        assert_eq!(err.to_string(), "request failed after 3 attempts");
        let source = std::error::Error::source(&err).expect("source");
        assert!(source.to_string().contains("500"));
    }
}
