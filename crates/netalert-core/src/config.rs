//! Configuration for reaching the NetAlertX API.
//!
//! Configuration is normally read from the environment by the binary entry
//! point and then passed explicitly into the client. [`ApiConfig::from_lookup`]
//! takes any variable lookup so the same parsing runs against a plain map in
//! tests.

use crate::client::{DEFAULT_API_PORT, DEVICES_DEFAULT_TIMEOUT};
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Environment variable holding the API host.
pub const ENV_HOST: &str = "NETALERTX_HOST";

/// Environment variable holding the API port.
pub const ENV_PORT: &str = "NETALERTX_PORT";

/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "NETALERTX_TOKEN";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "NETALERTX_TIMEOUT";

/// Environment variable enabling debug tracing when set to `1`.
pub const ENV_DEBUG: &str = "NETALERTX_DEBUG";

/// Default API host.
pub const DEFAULT_API_HOST: &str = "localhost";

/// Path of the device listing endpoint.
pub const DEVICES_PATH: &str = "devices";

/// Connection settings for the NetAlertX API.
///
/// The token is kept in a [`SecretString`] so it is redacted from `Debug`
/// output and tracing fields.
#[derive(Debug, Validate)]
pub struct ApiConfig {
    /// API host name or address
    #[validate(length(min = 1))]
    pub host: String,

    /// API port
    #[validate(range(min = 1))]
    pub port: u16,

    /// Bearer token sent with every request
    pub token: SecretString,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a configuration for `localhost` on the default port.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token: String = token.into();
        if token.is_empty() {
            return Err(Error::ConfigError(format!("{ENV_TOKEN} is not set")));
        }

        Ok(Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            token: SecretString::from(token),
            timeout_secs: DEVICES_DEFAULT_TIMEOUT,
        })
    }

    /// Build a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_lookup`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Empty host and port values fall back to their defaults; an empty token
    /// is treated the same as a missing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token is missing, if the port or
    /// timeout is not a number, or if validation fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let token = non_empty(ENV_TOKEN)
            .ok_or_else(|| Error::ConfigError(format!("{ENV_TOKEN} is not set")))?;
        let mut config = Self::new(token)?;

        if let Some(host) = non_empty(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = non_empty(ENV_PORT) {
            config.port = port.trim().parse().map_err(|err| {
                Error::ConfigError(format!("Invalid {ENV_PORT} `{port}`: {err}"))
            })?;
        }
        if let Some(timeout) = non_empty(ENV_TIMEOUT) {
            config.timeout_secs = timeout.trim().parse().map_err(|err| {
                Error::ConfigError(format!("Invalid {ENV_TIMEOUT} `{timeout}`: {err}"))
            })?;
        }

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the API host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Expose the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Root URL of the API, `http://{host}:{port}/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if host and port do not form a URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&format!("http://{}:{}/", self.host, self.port))
            .map_err(|e| Error::InvalidEndpoint(format!("Invalid API host `{}`: {e}", self.host)))
    }

    /// URL of the device listing endpoint, `http://{host}:{port}/devices`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if host and port do not form a URL.
    pub fn devices_url(&self) -> Result<Url, Error> {
        Ok(self.base_url()?.join(DEVICES_PATH)?)
    }
}

/// Whether debug tracing was requested through [`ENV_DEBUG`].
#[must_use]
pub fn debug_enabled<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_DEBUG).as_deref() == Some("1")
}
