//! HTTP API contract tests against a running gateway

use crate::helpers::{status_and_json, GatewayOptions, TestGateway};
use crate::mock_providers::{MockGemini, TEST_API_KEY};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_health() {
    let upstream = MockGemini::new().await;
    let gateway = TestGateway::start(&upstream).await;

    let (status, body) = status_and_json(gateway.get("/api/health").await).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(upstream.calls().await, 0);
}

#[tokio::test]
async fn test_chat_success_passes_reply_through() {
    let upstream = MockGemini::new().await;
    let reply = "Here you go:\n1. **first**\n2. *second*";
    upstream.mock_reply("gemini-2.5-flash", reply).await;
    let gateway = TestGateway::start(&upstream).await;

    let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": "list two" })).await).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "success": true, "reply": reply }));
}

#[tokio::test]
async fn test_upstream_request_shape() {
    let upstream = MockGemini::new().await;
    upstream.mock_reply("gemini-1.5-pro", "ok").await;
    let gateway = TestGateway::start(&upstream).await;

    gateway
        .post_chat(&json!({ "message": "  keep my spaces ", "model": "gemini-1.5-pro" }))
        .await;

    assert_eq!(
        upstream.last_request_body().await,
        Some(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "  keep my spaces " }] }]
        }))
    );

    let requests = upstream.server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers["x-goog-api-key"], TEST_API_KEY);
    assert!(!requests[0].url.as_str().contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_multi_part_reply_is_joined() {
    let upstream = MockGemini::new().await;
    upstream
        .mock_reply_parts("gemini-2.5-flash", &["Hello", ", ", "world"])
        .await;
    let gateway = TestGateway::start(&upstream).await;

    let (_, body) = status_and_json(gateway.post_chat(&json!({ "message": "hi" })).await).await;

    assert_eq!(body["reply"], "Hello, world");
}

#[tokio::test]
async fn test_validation_never_reaches_upstream() {
    let upstream = MockGemini::new().await;
    upstream.mock_reply("gemini-2.5-flash", "unused").await;
    let gateway = TestGateway::start(&upstream).await;

    let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": " " })).await).await;
    assert_eq!(status, 400);
    assert_eq!(body["errorCode"], "EMPTY_MESSAGE");

    let (status, body) = status_and_json(
        gateway
            .post_chat(&json!({ "message": "hi", "model": "gpt-4" }))
            .await,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["errorCode"], "INVALID_MODEL");

    let (status, body) = status_and_json(gateway.post_chat_raw("not json").await).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], "UNKNOWN_ERROR");

    assert_eq!(upstream.calls().await, 0);
}

#[tokio::test]
async fn test_upstream_failures_are_classified() {
    let cases = [
        (429, "Resource has been exhausted (e.g. check quota).", "RESOURCE_EXHAUSTED", 429, "QUOTA_EXCEEDED"),
        (400, "API key not valid. Please pass a valid API key.", "INVALID_ARGUMENT", 401, "API_KEY_INVALID"),
        (403, "Method doesn't allow unregistered callers.", "PERMISSION_DENIED", 500, "UNKNOWN_ERROR"),
        (404, "models/gemini-2.5-flash is not found for API version v1beta", "NOT_FOUND", 404, "MODEL_NOT_FOUND"),
        (503, "The model is overloaded. Please try again later.", "UNAVAILABLE", 404, "MODEL_NOT_FOUND"),
        (504, "Deadline expired before operation could complete.", "DEADLINE_EXCEEDED", 408, "TIMEOUT"),
    ];

    for (upstream_status, message, status_name, expected_status, expected_code) in cases {
        let upstream = MockGemini::new().await;
        upstream.mock_error(upstream_status, message, status_name).await;
        let gateway = TestGateway::start(&upstream).await;

        let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": "hi" })).await).await;

        assert_eq!(status, expected_status, "{message}");
        assert_eq!(body["errorCode"], expected_code, "{message}");
        assert!(body.get("details").is_none());
    }
}

#[tokio::test]
async fn test_blocked_prompt() {
    let upstream = MockGemini::new().await;
    upstream.mock_blocked_prompt().await;
    let gateway = TestGateway::start(&upstream).await;

    let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": "hi" })).await).await;

    assert_eq!(status, 400);
    assert_eq!(body["errorCode"], "CONTENT_BLOCKED");
}

#[tokio::test]
async fn test_upstream_timeout() {
    let upstream = MockGemini::new().await;
    upstream
        .mock_reply_delayed("gemini-2.5-flash", "too late", Duration::from_secs(3))
        .await;
    let gateway = TestGateway::start_with(
        &upstream,
        GatewayOptions {
            provider_timeout: Duration::from_millis(200),
            ..GatewayOptions::default()
        },
    )
    .await;

    let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": "hi" })).await).await;

    assert_eq!(status, 408);
    assert_eq!(body["errorCode"], "TIMEOUT");
}

#[tokio::test]
async fn test_missing_api_key() {
    let upstream = MockGemini::new().await;
    upstream.mock_reply("gemini-2.5-flash", "unused").await;
    let gateway = TestGateway::start_with(
        &upstream,
        GatewayOptions {
            with_api_key: false,
            ..GatewayOptions::default()
        },
    )
    .await;

    let (status, body) = status_and_json(gateway.post_chat(&json!({ "message": "hi" })).await).await;

    assert_eq!(status, 401);
    assert_eq!(body["errorCode"], "API_KEY_INVALID");
    assert_eq!(upstream.calls().await, 0);
}

#[tokio::test]
async fn test_details_in_development_only() {
    let upstream = MockGemini::new().await;
    upstream.mock_raw(500, "disk full").await;

    let production = TestGateway::start(&upstream).await;
    let (status, body) = status_and_json(production.post_chat(&json!({ "message": "hi" })).await).await;
    assert_eq!(status, 500);
    assert_eq!(body["errorCode"], "UNKNOWN_ERROR");
    assert!(body.get("details").is_none());

    let development = TestGateway::start_with(
        &upstream,
        GatewayOptions {
            development: true,
            ..GatewayOptions::default()
        },
    )
    .await;
    let (_, body) = status_and_json(development.post_chat(&json!({ "message": "hi" })).await).await;
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("disk full"));
    assert!(!details.contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_request_id_round_trip() {
    let upstream = MockGemini::new().await;
    let gateway = TestGateway::start(&upstream).await;

    let response = gateway
        .http
        .get(gateway.url("/api/health"))
        .header("x-request-id", "integration-1")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "integration-1");
}
