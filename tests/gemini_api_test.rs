//! Tests for the Gemini API client
//! Uses wiremock to mock HTTP responses

use std::sync::Arc;

use edu_copilot::config::{Config, ConfigOptions};
use edu_copilot::service::call_gemini_endpoint;
use reqwest::Client;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap()
}

fn mock_config(base_url: &str) -> Arc<Config> {
    Config::new(
        "test-api-key".to_string(),
        ConfigOptions {
            base_url: Some(base_url.to_string()),
            ..Default::default()
        },
    )
    .unwrap()
}

fn gemini_success_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [{"text": text}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    })
}

#[tokio::test]
async fn test_gemini_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_success_body("Generated lesson plan")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "Test prompt").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "Generated lesson plan");
}

#[tokio::test]
async fn test_gemini_sends_prompt_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": "Exact prompt text"}]}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "Exact prompt text").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_gemini_custom_model_in_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = Config::new(
        "test-api-key".to_string(),
        ConfigOptions {
            base_url: Some(mock_server.uri()),
            model: Some("gemini-2.0-flash".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_gemini_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("API key invalid or expired"));
}

#[tokio::test]
async fn test_gemini_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("access denied"));
}

#[tokio::test]
async fn test_gemini_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("Gemini API failed"));
    assert!(msg.contains("quota exceeded"));
}

#[tokio::test]
async fn test_gemini_empty_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("empty response"));
}

#[tokio::test]
async fn test_gemini_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = create_test_client();
    let config = mock_config(&mock_server.uri());

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to parse Gemini response"));
}

#[tokio::test]
async fn test_gemini_connection_refused() {
    // Nothing listening on this port
    let client = create_test_client();
    let config = mock_config("http://127.0.0.1:1");

    let result = call_gemini_endpoint(&client, &config, "prompt").await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Gemini API request failed"));
}
