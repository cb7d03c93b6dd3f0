use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CounselError, Result};
use crate::models::TopicRecord;

const BUILTIN_TOPICS_YAML: &str = include_str!("../assets/topics.yaml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The static topic table. Loaded once, immutable afterwards. Record order is
/// preserved from the source document; the scorer's tie-break depends on it.
#[derive(Debug, Clone)]
pub struct TopicTable {
    records: Vec<TopicRecord>,
    source: TableSource,
}

impl TopicTable {
    /// Parses the embedded legal topic table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let records: Vec<TopicRecord> = serde_norway::from_str(BUILTIN_TOPICS_YAML)?;
        Self::from_records(records, TableSource::Builtin)
    }

    /// Loads a table from a `.json` or YAML document holding a sequence of
    /// records.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<TopicRecord> = if is_json_path(path) {
            serde_json::from_str(&raw)?
        } else {
            serde_norway::from_str(&raw)?
        };
        Self::from_records(records, TableSource::File(path.to_path_buf()))
    }

    pub fn from_records(records: Vec<TopicRecord>, source: TableSource) -> Result<Self> {
        let mut normalized = Vec::with_capacity(records.len());
        for record in records {
            normalized.push(normalize_record(record)?);
        }
        for (index, record) in normalized.iter().enumerate() {
            if normalized[..index].iter().any(|seen| seen.key == record.key) {
                return Err(CounselError::Validation(format!(
                    "duplicate topic key: {}",
                    record.key
                )));
            }
        }
        Ok(Self {
            records: normalized,
            source,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[TopicRecord] {
        &self.records
    }

    /// Exact-key lookup; keys are stored lower-cased.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TopicRecord> {
        let key = key.trim().to_lowercase();
        self.records.iter().find(|record| record.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> &TableSource {
        &self.source
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn normalize_record(record: TopicRecord) -> Result<TopicRecord> {
    let key = record.key.trim().to_lowercase();
    if key.is_empty() {
        return Err(CounselError::Validation(
            "topic key must not be blank".to_string(),
        ));
    }
    if record.response_text.trim().is_empty() {
        return Err(CounselError::Validation(format!(
            "topic {key} has no response text"
        )));
    }
    let mut keywords = Vec::with_capacity(record.keywords.len());
    for keyword in record.keywords {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(CounselError::Validation(format!(
                "topic {key} has a blank keyword"
            )));
        }
        keywords.push(keyword);
    }
    Ok(TopicRecord {
        key,
        keywords,
        response_text: record.response_text,
        citation: record.citation,
    })
}
