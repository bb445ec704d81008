//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for simpleqa
#[derive(Parser, Debug)]
#[command(name = "simpleqa")]
#[command(author, version, about = "SimpleQA chatbot - dataset lookup with Gemini fallback")]
#[command(long_about = r#"
SimpleQA answers questions from a local QA dataset when a stored question is
similar enough, and falls back to the Gemini API otherwise, carrying the
near-miss question along as retrieval context.

GEMINI_API_KEY must be set in the environment.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. SIMPLEQA_* env      e.g. SIMPLEQA_MATCHER__THRESHOLD=85
3. ./simpleqa.toml     Project-level config
4. ~/.config/simpleqa/config.toml   Global config

Example:
  simpleqa "What is the capital of France?"
  simpleqa --threshold 90 "Who wrote Hamlet?"
  simpleqa --chat
"#)]
pub struct Cli {
    /// The question to answer (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Gemini model for the fallback path
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Hugging Face dataset to load
    #[arg(long, value_name = "NAME")]
    pub dataset: Option<String>,

    /// Dataset split to load
    #[arg(long, value_name = "SPLIT")]
    pub split: Option<String>,

    /// Minimum similarity score (0-100) for a dataset answer
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<u8>,

    /// Use only the cached dataset copy; never touch the network
    #[arg(long)]
    pub offline: bool,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of answered turns to this path
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
