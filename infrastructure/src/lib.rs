//! Infrastructure layer for simpleqa-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use dataset::{DatasetCache, HuggingFaceDatasetSource};
pub use logging::JsonlTranscriptLogger;
pub use providers::GeminiGenerator;
