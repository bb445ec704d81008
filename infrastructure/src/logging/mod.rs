//! Logging infrastructure: structured transcript logging.

mod jsonl;

pub use jsonl::JsonlTranscriptLogger;
