//! Gemini provider implementation
//!
//! Calls the Google Generative Language REST API
//! (`models/{model}:generateContent`) with the API key as a query
//! parameter.

use crate::insight::{InsightError, InsightProvider, InsightRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini provider configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout: Duration::from_secs(60),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Gemini provider implementation
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self, InsightError> {
        if config.api_key.is_empty() {
            return Err(InsightError::NotConfigured(
                "Gemini API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InsightError::NetworkError(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn annotate(&self, request: &InsightRequest) -> Result<String, InsightError> {
        let generation_config = match (self.config.temperature, self.config.max_tokens) {
            (None, None) => None,
            (temperature, max_output_tokens) => Some(GenerationConfig {
                temperature,
                max_output_tokens,
            }),
        };

        let gemini_request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt(),
                }],
            }],
            generation_config,
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent?key={}",
                self.config.base_url, self.config.model, self.config.api_key
            ))
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| InsightError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(InsightError::ApiError(format!(
                "Gemini API error: {status} - {error_text}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InsightError::InvalidResponse(e.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(InsightError::ApiError(
                "No content returned from Gemini".to_string(),
            ));
        }

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
