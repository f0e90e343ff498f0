//! Asynchronous NetAlertX API client.

use crate::models::DevicesResponse;
use crate::Result;
use netalert_core::client::ClientConfig;
use netalert_core::config::DEVICES_PATH;
use netalert_core::{ApiConfig, Error};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("netalert-api/", env!("CARGO_PKG_VERSION"));

/// Builder for [`DevicesClient`].
#[derive(Debug, Clone)]
pub struct DevicesClientBuilder {
    base_url: Url,
    http_config: ClientConfig,
    token: Option<String>,
}

impl DevicesClientBuilder {
    /// Create a new builder from the provided base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!(
                "Invalid NetAlertX base URL `{}`: {err}",
                base_url.as_ref()
            ))
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            http_config: ClientConfig::new(),
            token: None,
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Configure the bearer token sent in the `Authorization` header.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the client instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<DevicesClient> {
        let http = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .connect_timeout(self.http_config.connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| {
                Error::ConfigError(format!("Failed to build NetAlertX HTTP client: {err}"))
            })?;

        Ok(DevicesClient {
            http,
            base_url: self.base_url,
            token: self.token,
        })
    }
}

/// Asynchronous client for the NetAlertX devices API.
#[derive(Clone)]
pub struct DevicesClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl DevicesClient {
    /// Construct directly from a base URL, without authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to build.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        DevicesClientBuilder::new(base_url)?.build()
    }

    /// Construct a client from an [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host and port do not form a URL or
    /// the HTTP client fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http_config = ClientConfig::new().with_timeout(config.timeout());
        DevicesClientBuilder::new(config.base_url()?)?
            .with_http_config(http_config)
            .with_token(config.token())
            .build()
    }

    /// Access the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List every device record known to NetAlertX.
    ///
    /// Performs exactly one request; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceUnavailable`] when the connection fails,
    /// [`Error::Timeout`] when the request exceeds the configured bound,
    /// [`Error::HttpError`] on a non-success status, and [`Error::ParseError`]
    /// when the body is not the expected JSON.
    pub async fn list_devices(&self) -> Result<Vec<Value>> {
        let url = self.build_url(DEVICES_PATH)?;
        let mut request = self
            .http
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        info!(url = %url, "NetAlertX request");

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::HttpError(format!(
                    "NetAlertX authentication failed ({status}): {text}"
                )),
                _ => Error::HttpError(format!("NetAlertX error {status}: {text}")),
            });
        }

        let devices = DevicesResponse::from_slice(&bytes)?.devices;
        debug!(count = devices.len(), "NetAlertX devices received");
        Ok(devices)
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);
        self.base_url.join(normalized).map_err(|err| {
            Error::InvalidEndpoint(format!("Invalid NetAlertX path `{path}`: {err}"))
        })
    }
}
