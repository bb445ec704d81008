//! Answer query use case.
//!
//! Resolves one query end-to-end: scan the dataset for a confident match,
//! and only when none clears the threshold fall back to the remote model
//! with the weak match as context.
//!
//! The fallback path never fails hard: remote errors are downgraded to a
//! displayable string and the turn still reaches the session history.

use crate::ports::text_generator::{GeneratorError, TextGenerator};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use serde::Serialize;
use simpleqa_domain::{AnswerSource, Dataset, build_rag_prompt, find_best_match};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The unconfident best match carried along the fallback path.
#[derive(Debug, Clone, Serialize)]
pub struct WeakMatch {
    pub question: String,
    pub score: u8,
}

/// Result of answering one query.
///
/// `weak_match` is populated only on the fallback path, where the UI shows
/// the near-miss question and its score next to the generated answer.
#[derive(Debug, Clone, Serialize)]
pub struct Answered {
    pub response: String,
    pub source: AnswerSource,
    pub weak_match: Option<WeakMatch>,
}

/// Use case for answering a single query.
///
/// 1. Scan the dataset with the similarity matcher
/// 2. Confident match: return the stored answer verbatim, source `Dataset`
/// 3. Otherwise: build a prompt (weak match as context) and call the
///    remote model, source `Gemini API (RAG)`
pub struct AnswerQueryUseCase {
    dataset: Arc<Dataset>,
    generator: Arc<dyn TextGenerator>,
    transcript: Arc<dyn TranscriptLogger>,
    threshold: u8,
}

impl Clone for AnswerQueryUseCase {
    fn clone(&self) -> Self {
        Self {
            dataset: self.dataset.clone(),
            generator: self.generator.clone(),
            transcript: self.transcript.clone(),
            threshold: self.threshold,
        }
    }
}

impl AnswerQueryUseCase {
    pub fn new(dataset: Arc<Dataset>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            dataset,
            generator,
            transcript: Arc::new(NoTranscriptLogger),
            threshold: simpleqa_domain::DEFAULT_THRESHOLD,
        }
    }

    /// Override the confidence threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Attach a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Answer one query. Infallible: remote failures become displayable text.
    pub async fn execute(&self, query: &str) -> Answered {
        let result = find_best_match(query, &self.dataset, self.threshold);

        if let Some(answer) = result.answer {
            info!(score = result.score, "query resolved from dataset");
            self.transcript.log(TranscriptEvent::new(
                "dataset_hit",
                serde_json::json!({
                    "query": query,
                    "matched_question": result.matched_question,
                    "score": result.score,
                }),
            ));
            return Answered {
                response: answer,
                source: AnswerSource::Dataset,
                weak_match: None,
            };
        }

        debug!(
            score = result.score,
            threshold = self.threshold,
            "no confident match, falling back to remote model"
        );

        let prompt = build_rag_prompt(query, result.matched_question.as_deref());
        let response = match self.generator.generate(&prompt).await {
            Ok(text) => {
                self.transcript.log(TranscriptEvent::new(
                    "gemini_response",
                    serde_json::json!({
                        "query": query,
                        "model": self.generator.model(),
                        "bytes": text.len(),
                    }),
                ));
                text
            }
            Err(GeneratorError::UnexpectedFormat) => {
                warn!("remote model returned an unexpected response shape");
                self.transcript.log(TranscriptEvent::new(
                    "gemini_error",
                    serde_json::json!({ "query": query, "error": "unexpected format" }),
                ));
                "Unexpected API response format".to_string()
            }
            Err(e) => {
                warn!(error = %e, "remote model call failed");
                self.transcript.log(TranscriptEvent::new(
                    "gemini_error",
                    serde_json::json!({ "query": query, "error": e.to_string() }),
                ));
                format!("Error querying Gemini API: {e}")
            }
        };

        let weak_match = result.matched_question.map(|question| WeakMatch {
            question,
            score: result.score,
        });

        Answered {
            response,
            source: AnswerSource::GeminiApi,
            weak_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use simpleqa_domain::QaRecord;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Generator that records every prompt it receives.
    struct MockGenerator {
        reply: Result<String, fn() -> GeneratorError>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn answering(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(make_error: fn() -> GeneratorError) -> Self {
            Self {
                reply: Err(make_error),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        fn model(&self) -> &str {
            "mock-model"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make_error) => Err(make_error()),
            }
        }
    }

    fn capitals() -> Arc<Dataset> {
        Arc::new(
            [
                QaRecord::new("What is the capital of France?", "Paris"),
                QaRecord::new("What is the capital of Japan?", "Tokyo"),
            ]
            .into_iter()
            .collect(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_confident_match_skips_generator() {
        let generator = Arc::new(MockGenerator::answering("should never be used"));
        let use_case = AnswerQueryUseCase::new(capitals(), generator.clone());

        let answered = use_case.execute("What is the capital of France?").await;

        assert_eq!(answered.source, AnswerSource::Dataset);
        assert_eq!(answered.response, "Paris");
        assert!(answered.weak_match.is_none());
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_fallback_carries_weak_match_context() {
        let generator = Arc::new(MockGenerator::answering("Neptune has 16 known moons."));
        let use_case = AnswerQueryUseCase::new(capitals(), generator.clone());

        let answered = use_case.execute("How many moons does Neptune have?").await;

        assert_eq!(answered.source, AnswerSource::GeminiApi);
        assert_eq!(answered.response, "Neptune has 16 known moons.");

        let weak = answered.weak_match.expect("weak match should be reported");
        assert!(weak.score < use_case.threshold());

        // The prompt embeds both the query and the weak-match question
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("How many moons does Neptune have?"));
        assert!(prompts[0].contains(&weak.question));
    }

    #[tokio::test]
    async fn test_fallback_without_any_candidate() {
        let generator = Arc::new(MockGenerator::answering("42"));
        let use_case = AnswerQueryUseCase::new(Arc::new(Dataset::default()), generator.clone());

        let answered = use_case.execute("What is the answer?").await;

        assert_eq!(answered.source, AnswerSource::GeminiApi);
        assert!(answered.weak_match.is_none());
        assert!(!generator.prompts()[0].contains("Context:"));
    }

    #[tokio::test]
    async fn test_generator_error_becomes_displayable_string() {
        let generator = Arc::new(MockGenerator::failing(|| {
            GeneratorError::RequestFailed("connection refused".to_string())
        }));
        let use_case = AnswerQueryUseCase::new(capitals(), generator);

        let answered = use_case.execute("How many moons does Neptune have?").await;

        assert_eq!(answered.source, AnswerSource::GeminiApi);
        assert!(
            answered
                .response
                .starts_with("Error querying Gemini API:")
        );
        assert!(answered.response.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_unexpected_format_becomes_literal_string() {
        let generator = Arc::new(MockGenerator::failing(|| GeneratorError::UnexpectedFormat));
        let use_case = AnswerQueryUseCase::new(capitals(), generator);

        let answered = use_case.execute("How many moons does Neptune have?").await;

        assert_eq!(answered.response, "Unexpected API response format");
        assert_eq!(answered.source, AnswerSource::GeminiApi);
    }

    #[tokio::test]
    async fn test_threshold_override() {
        // With a threshold of 0 every non-trivial overlap is confident
        let generator = Arc::new(MockGenerator::answering("unused"));
        let use_case = AnswerQueryUseCase::new(capitals(), generator.clone()).with_threshold(1);

        let answered = use_case.execute("capital of France").await;

        assert_eq!(answered.source, AnswerSource::Dataset);
        assert_eq!(answered.response, "Paris");
        assert!(generator.prompts().is_empty());
    }
}
