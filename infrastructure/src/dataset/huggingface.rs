//! Hugging Face datasets-server loader.
//!
//! Fetches a dataset split page by page from the public rows API, renames
//! columns into the `question`/`answer` shape the matcher expects, and
//! caches the normalized result on disk so later startups skip the network
//! entirely.

use super::cache::DatasetCache;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use simpleqa_application::ports::dataset_source::{DatasetError, DatasetSource};
use simpleqa_domain::{Dataset, QaRecord};
use tracing::{debug, info, warn};

const ROWS_ENDPOINT: &str = "https://datasets-server.huggingface.co/rows";
const PAGE_SIZE: usize = 100;

/// Dataset fetched when the config names nothing else.
pub const DEFAULT_DATASET: &str = "basicv8vc/SimpleQA";
pub const DEFAULT_SPLIT: &str = "test";

/// Source-specific column renames applied before validation.
const COLUMN_RENAMES: &[(&str, &str)] = &[("problem", "question")];

/// Dataset source backed by the Hugging Face datasets-server rows API.
pub struct HuggingFaceDatasetSource {
    client: reqwest::Client,
    endpoint: String,
    dataset: String,
    split: String,
    cache: Option<DatasetCache>,
    offline: bool,
}

impl HuggingFaceDatasetSource {
    pub fn new(dataset: impl Into<String>, split: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: ROWS_ENDPOINT.to_string(),
            dataset: dataset.into(),
            split: split.into(),
            cache: None,
            offline: false,
        }
    }

    /// Use an on-disk cache for the normalized dataset.
    pub fn with_cache(mut self, cache: DatasetCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Never touch the network; require a cached copy.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Point the loader at a different endpoint (local stubs).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn fetch_all(&self) -> Result<Dataset, DatasetError> {
        let mut records = Vec::new();
        let mut offset = 0usize;

        loop {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[
                    ("dataset", self.dataset.as_str()),
                    ("config", "default"),
                    ("split", self.split.as_str()),
                ])
                .query(&[("offset", offset), ("length", PAGE_SIZE)])
                .send()
                .await
                .map_err(|e| DatasetError::FetchFailed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(DatasetError::FetchFailed(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    body
                )));
            }

            let page: RowsPage = response
                .json()
                .await
                .map_err(|e| DatasetError::Malformed(e.to_string()))?;

            if page.rows.is_empty() {
                break;
            }

            let fetched = page.rows.len();
            for entry in page.rows {
                records.push(record_from_row(entry.row)?);
            }
            offset += fetched;

            debug!(offset, total = page.num_rows_total, "fetched dataset page");

            if offset as u64 >= page.num_rows_total {
                break;
            }
        }

        Ok(Dataset::new(records))
    }
}

#[async_trait]
impl DatasetSource for HuggingFaceDatasetSource {
    async fn load(&self) -> Result<Dataset, DatasetError> {
        if let Some(cache) = &self.cache {
            match cache.read() {
                Ok(Some(dataset)) => {
                    info!(
                        records = dataset.len(),
                        path = %cache.path().display(),
                        "loaded dataset from cache"
                    );
                    return Ok(dataset);
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "ignoring unreadable dataset cache"),
            }
        }

        if self.offline {
            return Err(DatasetError::Cache(
                "offline mode requested but no cached copy exists".to_string(),
            ));
        }

        info!(dataset = %self.dataset, split = %self.split, "fetching dataset");
        let dataset = self.fetch_all().await?;
        info!(records = dataset.len(), "dataset fetched");

        if let Some(cache) = &self.cache
            && let Err(e) = cache.write(&dataset)
        {
            warn!(error = %e, "could not write dataset cache");
        }

        Ok(dataset)
    }
}

#[derive(Debug, Deserialize)]
struct RowsPage {
    #[serde(default)]
    rows: Vec<RowEntry>,
    #[serde(default)]
    num_rows_total: u64,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: Map<String, Value>,
}

/// Normalize one raw row into a [`QaRecord`].
///
/// Renamed columns never overwrite an existing target column. A row without
/// `question` and `answer` after renaming is a fatal load error.
fn record_from_row(mut row: Map<String, Value>) -> Result<QaRecord, DatasetError> {
    for (from, to) in COLUMN_RENAMES {
        if !row.contains_key(*to)
            && let Some(value) = row.remove(*from)
        {
            row.insert((*to).to_string(), value);
        }
    }

    let question = field_text(&row, "question")
        .ok_or_else(|| DatasetError::MissingColumn("question".to_string()))?;
    let answer = field_text(&row, "answer")
        .ok_or_else(|| DatasetError::MissingColumn("answer".to_string()))?;

    Ok(QaRecord::new(question, answer))
}

/// Extract a column as text. Non-string scalars are rendered as JSON.
fn field_text(row: &Map<String, Value>, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
