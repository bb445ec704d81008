//! Application layer for simpleqa-chat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    dataset_source::{DatasetError, DatasetSource},
    text_generator::{GeneratorError, TextGenerator},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::answer_query::{AnswerQueryUseCase, Answered, WeakMatch};
