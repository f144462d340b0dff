//! Mock Gemini API for integration testing
//!
//! A wiremock server that speaks the `generateContent` REST shape.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key the test gateway sends upstream
pub const TEST_API_KEY: &str = "test-gemini-key";

/// Mock Gemini API server
pub struct MockGemini {
    pub server: MockServer,
}

impl MockGemini {
    /// Create a new mock Gemini server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Number of requests Gemini received
    pub async fn calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    /// Body of the most recent request
    pub async fn last_request_body(&self) -> Option<Value> {
        let requests = self.server.received_requests().await?;
        let last = requests.last()?;
        serde_json::from_slice(&last.body).ok()
    }

    /// Setup a successful reply for `model`
    pub async fn mock_reply(&self, model: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(endpoint(model)))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&[text])))
            .mount(&self.server)
            .await;
    }

    /// Setup a reply split across several parts
    pub async fn mock_reply_parts(&self, model: &str, parts: &[&str]) {
        Mock::given(method("POST"))
            .and(path(endpoint(model)))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(parts)))
            .mount(&self.server)
            .await;
    }

    /// Setup a reply that arrives after a delay
    pub async fn mock_reply_delayed(&self, model: &str, text: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(endpoint(model)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_reply(&[text]))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Setup a Google-style error response for any model
    pub async fn mock_error(&self, status: u16, message: &str, status_name: &str) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(gemini_error(status, message, status_name)),
            )
            .mount(&self.server)
            .await;
    }

    /// Setup a raw response body for any model
    pub async fn mock_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Setup a prompt rejected by the safety filters
    pub async fn mock_blocked_prompt(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&self.server)
            .await;
    }
}

/// Path of the `generateContent` endpoint for a model
pub fn endpoint(model: &str) -> String {
    format!("/models/{model}:generateContent")
}

/// Successful `generateContent` body
pub fn gemini_reply(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 4,
            "candidatesTokenCount": 12,
            "totalTokenCount": 16
        },
        "modelVersion": "gemini-2.5-flash"
    })
}

/// Google API error body
pub fn gemini_error(code: u16, message: &str, status: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}
