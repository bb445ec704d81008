//! Console output formatter for answered queries

use colored::Colorize;
use simpleqa_application::Answered;
use simpleqa_domain::{AnswerSource, SessionHistory, util::truncate};

/// Preview length for history entries.
const PREVIEW_LEN: usize = 30;

/// Formats answers and session history for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one answered query.
    ///
    /// On the fallback path the near-miss question and its score are shown
    /// under the answer, so the user can see what the dataset almost had.
    pub fn format_answer(answered: &Answered) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Response:".cyan().bold(),
            answered.response
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            answered.source
        ));

        if answered.source == AnswerSource::GeminiApi
            && let Some(weak) = &answered.weak_match
        {
            output.push_str(&format!(
                "{} {} (Score: {})\n",
                "Similar Question Found:".yellow().bold(),
                weak.question,
                weak.score
            ));
        }

        output
    }

    /// Format one answered query as pretty JSON.
    pub fn format_json(answered: &Answered) -> String {
        serde_json::to_string_pretty(answered).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the session history with truncated previews.
    pub fn format_history(history: &SessionHistory) -> String {
        if history.is_empty() {
            return "No chats yet.\n".to_string();
        }

        let mut output = String::new();
        for turn in history.turns() {
            output.push_str(&format!(
                "{} {}\n",
                "You:".cyan().bold(),
                truncate(&turn.prompt, PREVIEW_LEN)
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Bot:".green().bold(),
                truncate(&turn.response, PREVIEW_LEN)
            ));
            output.push_str(&format!("{} {}\n", "Source:".cyan().bold(), turn.source));
            output.push_str("---\n");
        }
        output
    }
}
