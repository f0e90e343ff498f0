//! HTTP client defaults.
//!
//! The inventory tooling makes a single request per run, so there is no retry
//! policy and no connection pool tuning here; only the bounds on how long that
//! one request may take.

use std::time::Duration;

/// Default port of the NetAlertX API
pub const DEFAULT_API_PORT: u16 = 20212;

/// Default timeout for the device listing request (in seconds)
pub const DEVICES_DEFAULT_TIMEOUT: u64 = 10;

/// Default connect timeout (in seconds)
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 5;

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total request timeout
    pub timeout: Duration,

    /// Connection establishment timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEVICES_DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
        }
    }

    /// Set request timeout.
    ///
    /// The connect timeout is clamped so it never exceeds the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = self.connect_timeout.min(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_API_PORT, 20212);
        assert_eq!(DEVICES_DEFAULT_TIMEOUT, 10);
        assert_eq!(DEFAULT_CONNECT_TIMEOUT, 5);
    }

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_with_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(30));

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_short_timeout_clamps_connect_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(1));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
    }
}
