//! Prompt construction for the remote-model fallback.

/// Build the fallback prompt for a query.
///
/// When the scan produced an unconfident best match, its question is
/// embedded as weak retrieval context; otherwise the prompt carries the
/// query alone.
pub fn build_rag_prompt(query: &str, similar_question: Option<&str>) -> String {
    match similar_question {
        Some(similar) => format!(
            "Answer the following query: '{query}'.\n\
             Context: A similar question found is '{similar}'.\n\
             Provide a precise and accurate answer."
        ),
        None => format!(
            "Answer the following query: '{query}'.\n\
             Provide a precise and accurate answer."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_context() {
        let prompt = build_rag_prompt("Who discovered penicillin?", None);
        assert!(prompt.contains("'Who discovered penicillin?'"));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_prompt_with_weak_context() {
        let prompt = build_rag_prompt(
            "Who discovered penicillin?",
            Some("Who discovered radium?"),
        );
        assert!(prompt.contains("'Who discovered penicillin?'"));
        assert!(prompt.contains("A similar question found is 'Who discovered radium?'"));
    }
}
