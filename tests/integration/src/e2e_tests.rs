//! End-to-end tests: SDK client -> gateway -> mock Gemini

use crate::helpers::TestGateway;
use crate::mock_providers::MockGemini;
use gateway_core::ErrorCode;
use gateway_sdk::{format_error_message, render_markdown, ChatOutcome, Client};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_reply_renders_as_html() {
    let upstream = MockGemini::new().await;
    upstream
        .mock_reply("gemini-2.5-flash", "**bold** and *italic*\n- item")
        .await;
    let gateway = TestGateway::start(&upstream).await;

    let outcome = gateway.sdk.send_message("format something", None).await;
    let reply = outcome.reply().expect("success");

    assert_eq!(
        render_markdown(reply),
        r#"<strong>bold</strong> and <em>italic</em><br><li style="margin-left: 20px;">item</li>"#
    );
}

#[tokio::test]
async fn test_model_selection() {
    let upstream = MockGemini::new().await;
    upstream.mock_reply("gemini-2.0-flash", "from 2.0").await;
    let gateway = TestGateway::start(&upstream).await;

    let outcome = gateway
        .sdk
        .send_message("hi", Some("gemini-2.0-flash"))
        .await;

    assert_eq!(
        outcome,
        ChatOutcome::Success {
            reply: "from 2.0".to_string()
        }
    );
}

#[tokio::test]
async fn test_provider_failure_shown_verbatim() {
    let upstream = MockGemini::new().await;
    upstream
        .mock_error(400, "API key not valid. Please pass a valid API key.", "INVALID_ARGUMENT")
        .await;
    let gateway = TestGateway::start(&upstream).await;

    let outcome = gateway.sdk.send_message("hi", None).await;
    let failure = outcome.failure().expect("failure");

    assert_eq!(failure.code(), Some(ErrorCode::ApiKeyInvalid));
    assert_eq!(failure.status, Some(401));
    assert_eq!(
        format_error_message(&failure.error_code, &failure.error, failure.status),
        failure.error
    );
}

#[tokio::test]
async fn test_unknown_failure_gets_label() {
    let upstream = MockGemini::new().await;
    upstream.mock_raw(500, "disk full").await;
    let gateway = TestGateway::start(&upstream).await;

    let outcome = gateway.sdk.send_message("hi", None).await;
    let failure = outcome.failure().expect("failure");

    assert_eq!(failure.code(), Some(ErrorCode::UnknownError));
    assert_eq!(
        format_error_message(&failure.error_code, &failure.error, failure.status),
        format!("Error 500 - {}", failure.error)
    );
}

#[tokio::test]
async fn test_local_validation_through_sdk() {
    let upstream = MockGemini::new().await;
    let gateway = TestGateway::start(&upstream).await;

    let outcome = gateway.sdk.send_message("hi", Some("gpt-4")).await;
    let failure = outcome.failure().expect("failure");

    assert_eq!(failure.code(), Some(ErrorCode::InvalidModel));
    assert_eq!(failure.status, Some(400));
    assert_eq!(upstream.calls().await, 0);
}

#[tokio::test]
async fn test_stopped_gateway_is_network_error() {
    let upstream = MockGemini::new().await;
    let gateway = TestGateway::start(&upstream).await;
    let base_url = gateway.base_url.clone();
    drop(gateway);

    // give the server task a moment to stop accepting
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let client = Client::builder().base_url(base_url).build().unwrap();
    let outcome = client.send_message("hi", None).await;
    let failure = outcome.failure().expect("failure");

    assert_eq!(failure.code(), Some(ErrorCode::NetworkError));
    assert_eq!(failure.status, None);
}

#[tokio::test]
async fn test_health_through_sdk() {
    let upstream = MockGemini::new().await;
    let gateway = TestGateway::start(&upstream).await;

    let health = gateway.sdk.health().await.unwrap();

    assert!(health.is_healthy());
    assert_eq!(health.version.as_deref(), Some("0.1.0"));
}
