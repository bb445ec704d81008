//! Dataset source port
//!
//! Defines the interface for the one-time dataset load at startup.

use async_trait::async_trait;
use simpleqa_domain::Dataset;
use thiserror::Error;

/// Errors that can occur while loading the dataset
///
/// All of these are fatal startup conditions: the application reports them
/// to the user and halts, with no retry.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to fetch dataset: {0}")]
    FetchFailed(String),

    #[error("Dataset is missing required column '{0}' after renaming")]
    MissingColumn(String),

    #[error("Malformed dataset payload: {0}")]
    Malformed(String),

    #[error("Cache error: {0}")]
    Cache(String),
}

/// Source of the question/answer dataset
///
/// `load` runs exactly once at startup and produces an immutable
/// [`Dataset`] handle; there is no re-loading or refresh during a session.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self) -> Result<Dataset, DatasetError>;
}
