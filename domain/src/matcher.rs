//! Best-match retrieval over the QA dataset.
//!
//! A single linear scan scores the query against every stored question with
//! a token-order-insensitive similarity ratio. There is deliberately no
//! index: dataset sizes here make an O(n) scan per query acceptable.

use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// Minimum score for a dataset answer to be used directly.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Outcome of a dataset scan for one query.
///
/// `answer` is present iff `score` cleared the threshold. Below the
/// threshold, `matched_question` still carries the best-seen question so the
/// fallback path can use it as weak context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub answer: Option<String>,
    pub matched_question: Option<String>,
    pub score: u8,
}

impl MatchResult {
    /// Whether the scan produced a directly usable answer.
    pub fn is_confident(&self) -> bool {
        self.answer.is_some()
    }
}

/// Token-order-insensitive similarity between two strings, scaled to 0-100.
///
/// Both sides are split on whitespace, token-sorted, and rejoined before the
/// normalized Levenshtein similarity is computed, so "capital of France" and
/// "France of capital" score 100.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let normalize = |s: &str| {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    };
    let ratio = strsim::normalized_levenshtein(&normalize(a), &normalize(b));
    (ratio * 100.0).round() as u8
}

/// Scan the dataset for the stored question most similar to `query`.
///
/// Ties keep the first-seen maximum: the comparison is strictly greater, so
/// a later record with an equal score never displaces the incumbent.
pub fn find_best_match(query: &str, dataset: &Dataset, threshold: u8) -> MatchResult {
    let query = query.to_lowercase();

    let mut best_score = 0u8;
    let mut best_question: Option<&str> = None;
    let mut best_answer: Option<&str> = None;

    for record in dataset.records() {
        let score = token_sort_ratio(&query, &record.question.to_lowercase());
        if score > best_score {
            best_score = score;
            best_question = Some(&record.question);
            best_answer = Some(&record.answer);
        }
    }

    if best_score >= threshold {
        MatchResult {
            answer: best_answer.map(str::to_owned),
            matched_question: best_question.map(str::to_owned),
            score: best_score,
        }
    } else {
        MatchResult {
            answer: None,
            matched_question: best_question.map(str::to_owned),
            score: best_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QaRecord;

    fn capitals() -> Dataset {
        [
            QaRecord::new("What is the capital of France?", "Paris"),
            QaRecord::new("What is the capital of Japan?", "Tokyo"),
            QaRecord::new("Who wrote Hamlet?", "William Shakespeare"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_exact_match_scores_100() {
        let result = find_best_match(
            "What is the capital of France?",
            &capitals(),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.answer.as_deref(), Some("Paris"));
        assert_eq!(
            result.matched_question.as_deref(),
            Some("What is the capital of France?")
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = find_best_match(
            "WHAT IS THE CAPITAL OF FRANCE?",
            &capitals(),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.answer.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_match_is_token_order_insensitive() {
        let result = find_best_match(
            "the capital of France? What is",
            &capitals(),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.answer.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_empty_dataset_scores_zero() {
        let result = find_best_match("anything at all", &Dataset::default(), DEFAULT_THRESHOLD);
        assert_eq!(result.score, 0);
        assert!(result.answer.is_none());
        assert!(result.matched_question.is_none());
    }

    #[test]
    fn test_below_threshold_keeps_weak_question() {
        let result = find_best_match(
            "How many moons does Neptune have?",
            &capitals(),
            DEFAULT_THRESHOLD,
        );
        assert!(result.answer.is_none());
        assert!(!result.is_confident());
        // Still reports the best-seen candidate for downstream context
        assert!(result.matched_question.is_some());
        assert!(result.score < DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_answer_is_verbatim_stored_answer() {
        let dataset: Dataset = [QaRecord::new("what is rust", "  A systems language.  ")]
            .into_iter()
            .collect();
        let result = find_best_match("what is rust", &dataset, DEFAULT_THRESHOLD);
        assert_eq!(result.answer.as_deref(), Some("  A systems language.  "));
    }

    #[test]
    fn test_tie_keeps_first_seen_record() {
        let dataset: Dataset = [
            QaRecord::new("What is the capital of France?", "first"),
            QaRecord::new("What is the capital of France?", "second"),
        ]
        .into_iter()
        .collect();
        let result = find_best_match(
            "What is the capital of France?",
            &dataset,
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.answer.as_deref(), Some("first"));
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let dataset = capitals();
        for query in ["", "x", "completely unrelated gibberish zzz", "capital"] {
            let result = find_best_match(query, &dataset, DEFAULT_THRESHOLD);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_token_sort_ratio_identical() {
        assert_eq!(token_sort_ratio("hello world", "world hello"), 100);
        assert_eq!(token_sort_ratio("hello", "hello"), 100);
    }

    #[test]
    fn test_token_sort_ratio_disjoint() {
        let score = token_sort_ratio("alpha beta", "gamma delta epsilon");
        assert!(score < DEFAULT_THRESHOLD);
    }
}
