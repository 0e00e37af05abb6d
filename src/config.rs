/// API configuration and the key loader

use std::time::Duration;

use serde::Deserialize;

use crate::error::{InsightsError, Result};
use crate::http::{HttpRequest, Transport};

/// Serverless function that hands out the analytics API key
pub const KEY_ENDPOINT: &str = "/.netlify/functions/get-api-key";

pub const DEFAULT_API_HOST: &str = "similarweb-insights.p.rapidapi.com";
pub const DEFAULT_BASE_URL: &str = "https://similarweb-insights.p.rapidapi.com";

/// Pause after each analytics request
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

pub const KEY_HEADER: &str = "x-rapidapi-key";
pub const HOST_HEADER: &str = "x-rapidapi-host";

/// Everything the query pipeline needs to talk to the analytics API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
    pub request_interval: Duration,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ApiConfig {
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_interval: DEFAULT_REQUEST_INTERVAL,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Attach the key and host headers the API requires
    pub fn authorize(&self, request: HttpRequest) -> HttpRequest {
        request
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.api_host)
    }
}

#[derive(Debug, Deserialize)]
struct KeyPayload {
    #[serde(rename = "API_KEY", default)]
    api_key: Option<serde_json::Value>,
}

/// Fetch the API key from `endpoint` and build the default configuration
pub async fn load_config<T: Transport>(transport: &T, endpoint: &str) -> Result<ApiConfig> {
    let response = transport.send(&HttpRequest::get(endpoint)).await?;

    if !response.is_success() {
        return Err(InsightsError::KeyEndpoint {
            status: response.status,
        });
    }

    let payload: KeyPayload = response.json()?;
    match payload.api_key {
        Some(serde_json::Value::String(key)) if !key.is_empty() => Ok(ApiConfig::new(key)),
        _ => Err(InsightsError::MissingApiKey),
    }
}

/// Where the page is in obtaining its configuration
#[derive(Debug, Clone, PartialEq)]
pub enum KeyState {
    Loading,
    Ready(ApiConfig),
    Failed(String),
}

impl KeyState {
    pub fn config(&self) -> Option<&ApiConfig> {
        match self {
            KeyState::Ready(config) => Some(config),
            _ => None,
        }
    }
}
