use crate::config::Config;
use crate::models::{error::AppError, health::HealthStatus};

// API CONFIGURATION
/// Configuration for the Roombook API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the URL of the health endpoint.
    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// ROOMBOOK CLIENT
/// HTTP client for the Roombook API.
pub struct RoombookClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RoombookClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the backend health status.
    pub async fn fetch_health(&self) -> Result<HealthStatus, AppError> {
        let url = self.config.health_url();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }
}

/// Maps a transport-level failure to an `AppError`.
///
/// A request that could not even be built (bad base URL) is a configuration
/// problem, not a network one.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_builder() {
        return AppError::ConfigError(format!("Invalid request: {error}"));
    }

    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_request() {
        "request failed"
    } else {
        "network failure"
    };
    AppError::ApiError(format!("Health check {kind}: {error}"))
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        429 => AppError::RateLimited,
        401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the backend health status using default configuration.
pub async fn fetch_health() -> Result<HealthStatus, AppError> {
    RoombookClient::new()?.fetch_health().await
}
