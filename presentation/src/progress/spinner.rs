//! Spinner shown while a query is being resolved.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner covering one answer round-trip.
///
/// A disabled spinner is inert; callers don't branch on `--quiet`.
pub struct AnswerSpinner {
    bar: Option<ProgressBar>,
}

impl AnswerSpinner {
    pub fn start(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message("Generating response...");
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar: Some(bar) }
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
