//! Presentation layer for simpleqa-chat
//!
//! This crate contains CLI definitions, output formatters,
//! the progress spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::AnswerSpinner;
