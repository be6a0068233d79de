use std::env;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use crate::decode::{DecodePolicy, ResponseBody};
use crate::error::{Result, TempFeelError, TransportError};
use crate::wire::{build_request_body, WireMap};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint serving feeling predictions.
pub const FEELS_ENDPOINT: &str = "/predict-feels";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "TEMPFEEL_API_URL";
/// Environment variable selecting the decode policy (`0`, `false` or `no` means lenient).
pub const STRICT_DECODE_ENV: &str = "TEMPFEEL_STRICT_DECODE";

/// Where the prediction service lives and how to talk to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Bound on the whole request once connected. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub policy: DecodePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
            policy: DecodePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from the environment.
    ///
    /// 1. `TEMPFEEL_API_URL`, when set and non-empty, replaces the base URL.
    /// 2. `TEMPFEEL_STRICT_DECODE` set to `0`, `false` or `no` selects lenient decoding.
    ///
    /// Anything unset keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Ok(strict) = env::var(STRICT_DECODE_ENV) {
            if matches!(strict.trim().to_lowercase().as_str(), "0" | "false" | "no") {
                config.policy = DecodePolicy::Lenient;
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Blocking HTTP transport for the prediction service.
///
/// Only framing and status handling live here; the response body is handed
/// back undecoded. The inner client pools connections and is safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            // the blocking client otherwise caps every request at 30s
            .timeout(config.request_timeout)
            .build()
            .map_err(TransportError::from)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts `instance` to `endpoint_path` as a one-element batch and returns
    /// the decoded JSON object.
    ///
    /// # Errors
    /// * [`TransportError::Network`] when the request cannot be completed
    /// * [`TransportError::Status`] for any status other than 200, with the raw body
    /// * [`TempFeelError::Decode`] when a 200 body is not a JSON object
    pub fn predict(&self, endpoint_path: &str, instance: &WireMap) -> Result<ResponseBody> {
        let url = format!("{}{}", self.base_url, endpoint_path);
        let payload = build_request_body(instance);
        info!("POST {}", url);
        debug!("Request body: {}", payload);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .map_err(TransportError::from)?;

        let status = response.status();
        let body = response.text().map_err(TransportError::from)?;
        debug!("Response status: {}, body: {}", status, body);

        if status != StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        serde_json::from_str::<ResponseBody>(&body).map_err(|e| {
            TempFeelError::Decode(format!("response is not a JSON object: {} (body: {})", e, body))
        })
    }
}
