//! Google Gemini provider implementation.
//!
//! Calls the Google AI Studio REST API:
//! `POST {base_url}/models/{MODEL}:generateContent`
//!
//! The API key travels in the `x-goog-api-key` header so it never ends up in
//! URLs, logs or error text.

use async_trait::async_trait;
use gateway_core::{GatewayError, GatewayResult, GenerativeProvider, ProviderError};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, trace, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of a non-JSON error body carried into the error text
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Finish reasons that mean the output was withheld
const BLOCKING_FINISH_REASONS: [&str; 4] = ["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Google provider configuration
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Provider instance ID
    pub id: String,
    /// API key; requests fail with an API key error when absent
    pub api_key: Option<SecretString>,
    /// REST base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GoogleConfig {
    /// Default REST base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Create a new Google AI Studio configuration
    #[must_use]
    pub fn google_ai(id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(id, Some(SecretString::new(api_key.into())))
    }

    /// Create a configuration with an optional key
    #[must_use]
    pub fn new(id: impl Into<String>, api_key: Option<SecretString>) -> Self {
        Self {
            id: id.into(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Google Gemini provider
pub struct GoogleProvider {
    config: GoogleConfig,
    client: Client,
}

impl GoogleProvider {
    /// Create a new Google provider
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created or the base URL is empty
    pub fn new(config: GoogleConfig) -> GatewayResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(GatewayError::configuration("Gemini base URL is empty"));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| {
                GatewayError::configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { config, client })
    }

    /// Build the endpoint URL for a model
    fn endpoint_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Describe a transport failure
    fn transport_error(err: reqwest::Error) -> ProviderError {
        error!(error = %err, "Gemini API request failed");

        if err.is_timeout() {
            ProviderError::new("Gemini request failed: deadline exceeded")
        } else if err.is_connect() {
            ProviderError::new("Gemini request failed: network connection error")
        } else {
            ProviderError::new(format!("Gemini request failed: {}", err.without_url()))
        }
    }

    /// Describe an HTTP error response
    fn parse_error(status: StatusCode, body: &str) -> ProviderError {
        #[derive(Deserialize)]
        struct GoogleErrorResponse {
            error: GoogleErrorDetail,
        }

        #[derive(Deserialize)]
        struct GoogleErrorDetail {
            message: String,
            #[serde(default)]
            status: Option<String>,
        }

        let reason = status.canonical_reason().unwrap_or("Unknown Status");
        let code = status.as_u16();

        let message = match serde_json::from_str::<GoogleErrorResponse>(body) {
            Ok(GoogleErrorResponse {
                error: GoogleErrorDetail {
                    message,
                    status: Some(upstream_status),
                },
            }) => format!("Gemini API error: HTTP {code} {reason}: {message} ({upstream_status})"),
            Ok(GoogleErrorResponse { error }) => {
                format!("Gemini API error: HTTP {code} {reason}: {}", error.message)
            }
            Err(_) => {
                let snippet: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
                format!("Gemini API error: HTTP {code} {reason}: {snippet}")
            }
        };

        ProviderError::new(message)
    }

    /// Pull the reply text out of a response
    fn extract_text(response: GoogleResponse) -> Result<String, ProviderError> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::new(format!(
                "Prompt was blocked by safety filters ({reason})"
            )));
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::new("Gemini returned no candidates"))?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            if let Some(reason) = candidate
                .finish_reason
                .as_deref()
                .filter(|r| BLOCKING_FINISH_REASONS.contains(r))
            {
                return Err(ProviderError::new(format!(
                    "Response was blocked by safety filters ({reason})"
                )));
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerativeProvider for GoogleProvider {
    fn id(&self) -> &str {
        &self.config.id
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let Some(api_key) = self.config.api_key.as_ref() else {
            warn!(provider = %self.config.id, "No API key configured");
            return Err(ProviderError::new("API key not configured"));
        };

        let url = self.endpoint_url(model);
        let request = GoogleRequest::user_prompt(prompt);

        debug!(
            provider = %self.config.id,
            model = %model,
            url = %url,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::transport_error)?;

        trace!(status = %status, body = %body, "Received Gemini response");

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        let parsed: GoogleResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Could not decode Gemini response");
            ProviderError::new("Gemini returned an unexpected response body")
        })?;

        Self::extract_text(parsed)
    }
}

// Google API Types

#[derive(Debug, Serialize)]
struct GoogleRequest<'a> {
    contents: Vec<GoogleRequestContent<'a>>,
}

impl<'a> GoogleRequest<'a> {
    fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![GoogleRequestContent {
                role: "user",
                parts: vec![GoogleRequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GoogleRequestContent<'a> {
    role: &'static str,
    parts: Vec<GoogleRequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GoogleRequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GooglePromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleCandidate {
    #[serde(default)]
    content: Option<GoogleContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleContent {
    #[serde(default)]
    parts: Vec<GooglePart>,
}

#[derive(Debug, Deserialize)]
struct GooglePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GooglePromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
