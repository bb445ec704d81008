//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::AnswerSpinner;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use simpleqa_application::AnswerQueryUseCase;
use simpleqa_domain::{ChatTurn, SessionHistory};
use std::path::PathBuf;

/// Interactive chat REPL
///
/// Owns one [`SessionHistory`] per `run()` call. The readline history file
/// (recall with arrow keys) is separate from the session history shown by
/// `/history`.
pub struct ChatRepl {
    use_case: AnswerQueryUseCase,
    model: String,
    records: usize,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: AnswerQueryUseCase, model: impl Into<String>, records: usize) -> Self {
        Self {
            use_case,
            model: model.into(),
            records,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load readline history
        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("simpleqa").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let mut session = SessionHistory::new();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line, &session) {
                            break;
                        }
                        continue;
                    }

                    // Add to readline history
                    let _ = rl.add_history_entry(line);

                    self.process_query(line, &mut session).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save readline history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           SimpleQA - Chat Mode              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Dataset: {} records loaded", self.records);
        println!("Fallback model: {}", self.model);
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /history  - Show this session's chat history");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str, session: &SessionHistory) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /history         - Show this session's chat history");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/history" => {
                println!();
                print!("{}", ConsoleFormatter::format_history(session));
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_query(&self, query: &str, session: &mut SessionHistory) {
        println!();

        let spinner = AnswerSpinner::start(self.show_progress);
        let answered = self.use_case.execute(query).await;
        spinner.finish();

        session.record(ChatTurn::new(
            query,
            answered.response.clone(),
            answered.source,
        ));

        print!("{}", ConsoleFormatter::format_answer(&answered));
        println!();
    }
}
