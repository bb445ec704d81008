//! QA dataset entities

use serde::{Deserialize, Serialize};

/// A single question/answer pair (Entity)
///
/// Records are immutable once loaded; the matcher returns stored answers
/// verbatim, never paraphrased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered, read-only collection of [`QaRecord`]s.
///
/// Loaded once at startup and shared for the lifetime of the process.
/// Record order is preserved from the source: the matcher's first-wins
/// tie-breaking depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<QaRecord>,
}

impl Dataset {
    pub fn new(records: Vec<QaRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<QaRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = QaRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
