//! Session domain entities

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a response came from (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerSource {
    /// Answered verbatim from the local dataset.
    Dataset,
    /// Answered by the remote model, with weak retrieval context.
    GeminiApi,
}

impl AnswerSource {
    /// Get the display label for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Dataset => "Dataset",
            AnswerSource::GeminiApi => "Gemini API (RAG)",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AnswerSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnswerSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Dataset" => Ok(AnswerSource::Dataset),
            "Gemini API (RAG)" => Ok(AnswerSource::GeminiApi),
            other => Err(serde::de::Error::custom(format!(
                "unknown answer source: {other}"
            ))),
        }
    }
}

/// One completed user interaction (Entity)
///
/// Turns are appended to the session history and never mutated or deleted
/// for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub prompt: String,
    pub response: String,
    pub source: AnswerSource,
}

impl ChatTurn {
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        source: AnswerSource,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            source,
        }
    }
}

/// Per-session chat history (Entity)
///
/// Explicit state owned by the orchestrating caller rather than a
/// process-wide global. Append-only; repeated identical queries produce
/// independent entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    turns: Vec<ChatTurn>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display_labels() {
        assert_eq!(AnswerSource::Dataset.to_string(), "Dataset");
        assert_eq!(AnswerSource::GeminiApi.to_string(), "Gemini API (RAG)");
    }

    #[test]
    fn test_source_serde_roundtrip() {
        for source in [AnswerSource::Dataset, AnswerSource::GeminiApi] {
            let json = serde_json::to_string(&source).unwrap();
            let parsed: AnswerSource = serde_json::from_str(&json).unwrap();
            assert_eq!(source, parsed);
        }
    }

    #[test]
    fn test_history_is_append_only() {
        let mut history = SessionHistory::new();
        assert!(history.is_empty());

        history.record(ChatTurn::new("q1", "a1", AnswerSource::Dataset));
        history.record(ChatTurn::new("q1", "a1", AnswerSource::Dataset));

        // Identical turns are kept as independent entries
        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].prompt, "q1");
    }
}
