//! Gemini `generateContent` adapter.
//!
//! Implements the [`TextGenerator`] port against the Google Generative
//! Language REST API. One prompt in, one text candidate out: no streaming,
//! no multi-turn state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use simpleqa_application::ports::text_generator::{GeneratorError, TextGenerator};
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model, matching the hosted deployment this assistant targets.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Default request timeout when the config does not set one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Text generator backed by the Gemini REST API.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    /// Create a generator with the given credential, model, and timeout.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the adapter at a different endpoint (local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn single_turn(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if the response has one.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.clone())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(model = %self.model, bytes = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::single_turn(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else {
                    GeneratorError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        parsed.first_text().ok_or(GeneratorError::UnexpectedFormat)
    }
}
