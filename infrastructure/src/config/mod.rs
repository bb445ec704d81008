//! Configuration loading and validation

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDatasetConfig, FileMatcherConfig, FileModelConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
