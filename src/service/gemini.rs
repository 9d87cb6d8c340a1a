//! Gemini API service

use std::time::Instant;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::map_auth_error;
use crate::config::Config;

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiApiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiApiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

fn build_gemini_url(base_url: &str, model: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let base_url = base_url.strip_suffix("/v1beta").unwrap_or(base_url);
    format!("{}/v1beta/models/{}:generateContent", base_url, model)
}

/// Send one prompt to the Gemini generateContent endpoint and return the
/// generated text. Single attempt, no retry.
pub async fn call_gemini_endpoint(client: &Client, config: &Config, prompt: &str) -> Result<String> {
    let payload = GeminiApiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        }],
    };

    let url = build_gemini_url(&config.base_url, &config.model);
    let start_time = Instant::now();

    info!("Calling Gemini API: {}", url);

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .header("x-goog-api-key", &config.api_key)
        .json(&payload)
        .send()
        .await;

    let duration_ms = start_time.elapsed().as_millis() as u64;
    info!("Gemini API call completed in {}ms", duration_ms);

    match response {
        Ok(resp) => {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();

            if let Some(err) = map_auth_error(status.as_u16(), "Gemini") {
                return Err(err);
            }

            if !status.is_success() {
                return Err(anyhow!("Gemini API failed: {} - {}", status, body_text));
            }

            let api_response: GeminiApiResponse = serde_json::from_str(&body_text)
                .map_err(|e| anyhow!("Failed to parse Gemini response: {} - {}", e, body_text))?;

            let text = api_response
                .candidates
                .first()
                .and_then(|c| c.content.parts.first())
                .and_then(|p| p.text.clone())
                .ok_or_else(|| anyhow!("Gemini API returned empty response"))?;

            Ok(text)
        }
        Err(e) => Err(anyhow!("Gemini API request failed: {}", e)),
    }
}
