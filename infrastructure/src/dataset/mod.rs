//! Dataset loading: Hugging Face fetch with an on-disk cache.

mod cache;
mod huggingface;

pub use cache::DatasetCache;
pub use huggingface::{DEFAULT_DATASET, DEFAULT_SPLIT, HuggingFaceDatasetSource};
