//! Configuration for [`super::GoogleMapsProvider`].

use std::time::Duration;

use thiserror::Error;

/// Default base URL of the Google Maps web services.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default user agent for upstream requests.
pub const DEFAULT_USER_AGENT: &str = "nearbite/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for [`super::GoogleMapsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// No API key was configured.
    #[error("a Google Maps API key is required")]
    MissingApiKey,
    /// The base URL could not be parsed.
    #[error("invalid base URL '{base_url}': {source}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        base_url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`super::GoogleMapsProvider`].
///
/// `Debug` output never includes the API key.
#[derive(Clone)]
pub struct GooglePlacesConfig {
    /// Base URL of the web services, without a trailing path segment for the
    /// individual APIs.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for GooglePlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GooglePlacesConfig {
    /// Create a configuration for the public endpoint with the given key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the provider at a different base URL, such as a proxy or a
    /// local stub server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Framing of a static map image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMapView {
    /// Zoom level.
    pub zoom: u8,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for StaticMapView {
    fn default() -> Self {
        Self {
            zoom: 14,
            width: 400,
            height: 200,
        }
    }
}
