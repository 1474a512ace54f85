use chrono::NaiveDateTime;
use serde::Serialize;

use super::Language;

/// Format of [`QueryRecord::timestamp`], local clock.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A user prompt as recorded for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    pub timestamp: String,
    pub language: Language,
    pub query: String,
}

impl QueryRecord {
    pub fn new(at: NaiveDateTime, language: Language, query: impl Into<String>) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            language,
            query: query.into(),
        }
    }
}

/// Append-only list of submitted prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLog {
    records: Vec<QueryRecord>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: QueryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[QueryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<QueryRecord> for QueryLog {
    fn from_iter<I: IntoIterator<Item = QueryRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
