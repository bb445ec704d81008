//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dataset_source;
pub mod text_generator;
pub mod transcript_logger;
