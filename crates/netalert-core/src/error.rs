//! Error types for inventory generation.
//!
//! Every failure the tooling can hit is fatal: the binary reports one line on
//! stderr and exits non-zero. The variants still carry enough detail to tell a
//! configuration problem apart from a transport or decode failure.

use thiserror::Error;

/// Main error type for NetAlertX inventory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// NetAlertX API refused or dropped the connection
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Operation timed out
    #[error("Timeout waiting for NetAlertX API: {0}")]
    Timeout(String),

    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Response body could not be decoded
    #[error("Invalid JSON from API: {0}")]
    ParseError(String),

    /// Inventory could not be rendered
    #[error("Failed to serialize inventory: {0}")]
    SerializeError(String),
}

/// Specialized result type for inventory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid configuration.
    Configuration,
    /// Connection, timeout or HTTP status failure.
    Transport,
    /// Response body was not the expected JSON.
    Decode,
    /// The inventory document could not be written.
    Output,
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError(_) | Self::InvalidEndpoint(_) => ErrorCategory::Configuration,
            Self::ServiceUnavailable(_) | Self::Timeout(_) | Self::HttpError(_) => {
                ErrorCategory::Transport
            }
            Self::ParseError(_) => ErrorCategory::Decode,
            Self::SerializeError(_) => ErrorCategory::Output,
        }
    }

    /// Process exit status for this error.
    ///
    /// There is no per-category status: any failure exits with `1`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ConfigError("NETALERTX_TOKEN is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: NETALERTX_TOKEN is not set"
        );

        let err = Error::ParseError("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid JSON from API: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            Error::ConfigError(String::new()).category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            Error::InvalidEndpoint(String::new()).category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            Error::ServiceUnavailable(String::new()).category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            Error::Timeout(String::new()).category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            Error::HttpError(String::new()).category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            Error::ParseError(String::new()).category(),
            ErrorCategory::Decode
        );
        assert_eq!(
            Error::SerializeError(String::new()).category(),
            ErrorCategory::Output
        );
    }

    #[test]
    fn test_every_error_is_fatal() {
        let errors = [
            Error::ConfigError(String::new()),
            Error::ServiceUnavailable(String::new()),
            Error::Timeout(String::new()),
            Error::HttpError(String::new()),
            Error::InvalidEndpoint(String::new()),
            Error::ParseError(String::new()),
            Error::SerializeError(String::new()),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{err} must exit non-zero");
        }
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let converted: Error = err.into();
        assert!(matches!(converted, Error::ParseError(_)));
        assert_eq!(converted.category(), ErrorCategory::Decode);
    }
}
