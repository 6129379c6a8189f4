//! Generative-text annotation layer
//!
//! A reading can be annotated with a personalized interpretation fetched
//! from a generative-text API. The [`InsightProvider`] trait keeps the
//! backends swappable; annotation is strictly optional and a failing
//! provider never fails a reading.

pub mod providers;

pub use providers::gemini::{GeminiConfig, GeminiProvider};
pub use providers::openai::{OpenAiConfig, OpenAiProvider};

use crate::config::AppConfig;
use crate::error::{NamaskarError, NamaskarResult};
use crate::numerology::Figure;
use async_trait::async_trait;
use thiserror::Error;

/// Insight provider errors
#[derive(Debug, Clone, Error)]
pub enum InsightError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("API error: {0}")]
    ApiError(String),
}

/// The figure an annotation is asked about
#[derive(Debug, Clone)]
pub struct InsightRequest {
    pub figure: Figure,
    /// Formula label, e.g. "Life Path"
    pub figure_label: String,
    /// The person the interpretation addresses
    pub user_name: String,
}

impl InsightRequest {
    pub fn life_path(figure: Figure, user_name: &str) -> Self {
        Self {
            figure,
            figure_label: "Life Path".to_string(),
            user_name: user_name.to_string(),
        }
    }

    /// Assemble the prompt sent to every backend
    pub fn prompt(&self) -> String {
        format!(
            "As a highly experienced numerologist, provide a concise and inspiring \
             interpretation for a person with {} Number {}. Incorporate common traits \
             and potential challenges associated with this number. Tailor the language \
             to sound encouraging and insightful. For {}.",
            self.figure_label, self.figure, self.user_name
        )
    }
}

/// Generative-text backend trait for dependency injection and testing
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini", "openai")
    fn name(&self) -> &str;

    /// Fetch an annotation for the requested figure
    async fn annotate(&self, request: &InsightRequest) -> Result<String, InsightError>;
}

/// Build the insight provider selected by the configuration
pub fn provider_from_config(config: &AppConfig) -> NamaskarResult<Box<dyn InsightProvider>> {
    let section = config.insight.as_ref().ok_or_else(|| {
        NamaskarError::invalid_input(
            "annotation requested but no [insight] section is configured",
        )
    })?;
    let api_key = config.insight_api_key()?;

    match section.provider.as_str() {
        "gemini" => {
            let mut provider_config = GeminiConfig {
                api_key,
                model: section.model.clone(),
                temperature: section.temperature,
                max_tokens: section.max_tokens,
                ..Default::default()
            };
            if let Some(endpoint) = &section.endpoint {
                provider_config.base_url = endpoint.clone();
            }
            Ok(Box::new(GeminiProvider::new(provider_config)?))
        }
        "openai" => {
            let mut provider_config = OpenAiConfig {
                api_key,
                model: section.model.clone(),
                temperature: section.temperature,
                max_tokens: section.max_tokens,
                ..Default::default()
            };
            if let Some(endpoint) = &section.endpoint {
                provider_config.base_url = endpoint.clone();
            }
            Ok(Box::new(OpenAiProvider::new(provider_config)?))
        }
        other => Err(NamaskarError::internal_error(format!(
            "unreachable insight provider '{other}' passed config validation"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_figure_and_name() {
        let request = InsightRequest::life_path(Figure::reduce_from(22).unwrap(), "John Doe");
        let prompt = request.prompt();
        assert!(prompt.contains("Life Path Number 22"));
        assert!(prompt.contains("For John Doe."));
        assert!(prompt.contains("numerologist"));
    }

    #[test]
    fn test_life_path_request_label() {
        let request = InsightRequest::life_path(Figure::reduce_from(7).unwrap(), "Jane");
        assert_eq!(request.figure_label, "Life Path");
        assert_eq!(request.figure.value(), 7);
    }
}
