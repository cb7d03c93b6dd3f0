use serde::{Deserialize, Serialize};

/// One entry of the static topic table: a canonical subject key, its keyword
/// synonyms, and the canned guidance payload returned on a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopicRecord {
    pub key: String,
    pub keywords: Vec<String>,
    pub response_text: String,
    pub citation: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseSource {
    Remote,
    Scorer,
    Fallback,
}

/// What a caller gets back from `ask`/`classify`. Total: every query maps to
/// one of these, the no-match case included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuidanceResponse {
    pub response_text: String,
    pub citation: String,
    /// Heuristic match strength in [0, 1]; not a probability.
    pub confidence: f32,
    pub source: ResponseSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TopicScore {
    pub key: String,
    pub score: u32,
}

/// Per-call scoring trace for the CLI explain view. Ephemeral, rebuilt on
/// every call.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyBreakdown {
    /// Query-level phrase bonus shared by every record.
    pub phrase_bonus: u32,
    /// Per-record base scores, highest first, key ascending on ties.
    pub scores: Vec<TopicScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub provider: String,
    pub topic_count: usize,
    pub table_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub request_id: String,
    pub operation: String,
    pub status: String,
    pub latency_ms: u128,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
