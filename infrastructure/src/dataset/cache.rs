//! On-disk JSON cache for the loaded dataset.
//!
//! The dataset is immutable for the lifetime of the process, so the cache
//! has no invalidation story: a cached copy is used as-is, and deleting the
//! file forces a re-fetch.

use simpleqa_application::ports::dataset_source::DatasetError;
use simpleqa_domain::Dataset;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Cache location for one (dataset, split) pair.
pub struct DatasetCache {
    path: PathBuf,
}

impl DatasetCache {
    /// Cache under the user cache directory, e.g.
    /// `~/.cache/simpleqa/basicv8vc--SimpleQA.test.json`.
    ///
    /// Returns `None` when the platform has no cache directory.
    pub fn for_dataset(name: &str, split: &str) -> Option<Self> {
        let dir = dirs::cache_dir()?.join("simpleqa");
        let file = format!("{}.{}.json", name.replace('/', "--"), split);
        Some(Self {
            path: dir.join(file),
        })
    }

    /// Cache at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached dataset. `Ok(None)` when no cache file exists.
    pub fn read(&self) -> Result<Option<Dataset>, DatasetError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path).map_err(|e| DatasetError::Cache(e.to_string()))?;
        let dataset = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DatasetError::Cache(e.to_string()))?;
        Ok(Some(dataset))
    }

    /// Write the dataset, creating parent directories as needed.
    pub fn write(&self, dataset: &Dataset) -> Result<(), DatasetError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatasetError::Cache(e.to_string()))?;
        }
        let file = File::create(&self.path).map_err(|e| DatasetError::Cache(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, dataset)
            .map_err(|e| DatasetError::Cache(e.to_string()))?;
        writer.flush().map_err(|e| DatasetError::Cache(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simpleqa_domain::QaRecord;

    #[test]
    fn test_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::at(dir.path().join("nested").join("qa.json"));

        let dataset: Dataset = [QaRecord::new("q", "a")].into_iter().collect();
        cache.write(&dataset).unwrap();

        let loaded = cache.read().unwrap().expect("cache should exist");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records()[0], QaRecord::new("q", "a"));
    }

    #[test]
    fn test_missing_cache_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::at(dir.path().join("absent.json"));
        assert!(cache.read().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        std::fs::write(&path, "not json at all").unwrap();

        let cache = DatasetCache::at(path);
        assert!(matches!(cache.read(), Err(DatasetError::Cache(_))));
    }

    #[test]
    fn test_for_dataset_path_shape() {
        if let Some(cache) = DatasetCache::for_dataset("basicv8vc/SimpleQA", "test") {
            let path = cache.path().to_string_lossy().into_owned();
            assert!(path.contains("simpleqa"));
            assert!(path.ends_with("basicv8vc--SimpleQA.test.json"));
        }
    }
}
