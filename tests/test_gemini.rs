//! Integration tests for the Gemini insight backend
//!
//! Tests behavioral contracts against a stub Generative Language server:
//! - Endpoint shape (model in path, API key as query parameter)
//! - Annotation extraction from candidates
//! - Error scenarios (API errors, empty candidates, malformed payloads)

use namaskar::insight::{GeminiConfig, GeminiProvider, InsightError, InsightProvider, InsightRequest};
use namaskar::numerology::Figure;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: "test-api-key".to_string(),
        base_url: base_url.to_string(),
        model: "gemini-1.5-flash".to_string(),
        timeout: Duration::from_secs(5),
        temperature: Some(0.7),
        max_tokens: Some(256),
    }
}

fn test_request() -> InsightRequest {
    InsightRequest::life_path(Figure::reduce_from(7).unwrap(), "John Doe")
}

#[tokio::test]
async fn test_annotation_returned_from_valid_response() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [{"text": "Seven is the seeker's number; trust your questions."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    let text = provider.annotate(&test_request()).await.unwrap();

    assert_eq!(text, "Seven is the seeker's number; trust your questions.");
}

#[tokio::test]
async fn test_multiple_parts_are_joined() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [{"text": "First half. "}, {"text": "Second half."}],
                    "role": "model"
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    let text = provider.annotate(&test_request()).await.unwrap();

    assert_eq!(text, "First half. Second half.");
}

#[tokio::test]
async fn test_api_error_status_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.annotate(&test_request()).await;

    match result.unwrap_err() {
        InsightError::ApiError(message) => assert!(message.contains("429")),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.annotate(&test_request()).await;

    assert!(matches!(result, Err(InsightError::ApiError(_))));
}

#[tokio::test]
async fn test_malformed_payload_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    let result = provider.annotate(&test_request()).await;

    assert!(matches!(result, Err(InsightError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_prompt_reaches_the_wire() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "candidates": [
            {"content": {"parts": [{"text": "ok"}], "role": "model"}}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(wiremock::matchers::body_string_contains("Life Path Number 7"))
        .and(wiremock::matchers::body_string_contains("John Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::new(test_config(&mock_server.uri())).unwrap();
    provider.annotate(&test_request()).await.unwrap();
}
