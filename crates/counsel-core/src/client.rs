use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{CounselError, Result};
use crate::models::{ClassifyBreakdown, GuidanceResponse, ServiceStatus, TopicRecord};
use crate::provider::RemoteProvider;
use crate::scorer::RelevanceEngine;
use crate::table::TopicTable;

mod request_log;

/// Facade over the topic table, scorer, and optional remote provider.
/// Constructed explicitly and passed to callers; there is no process-global
/// service instance.
pub struct Counsel {
    root: PathBuf,
    table: TopicTable,
    engine: RelevanceEngine,
    remote: Option<RemoteProvider>,
}

impl std::fmt::Debug for Counsel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counsel")
            .field("root", &self.root)
            .field("topic_count", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl Counsel {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(root, AppConfig::from_env())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: AppConfig) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let table = match &config.table_path {
            Some(path) => TopicTable::load(path)?,
            None => TopicTable::builtin()?,
        };
        let remote = config.remote.map(RemoteProvider::new).transpose()?;

        Ok(Self {
            root,
            table,
            engine: RelevanceEngine::new(config.scorer),
            remote,
        })
    }

    /// Full pipeline: remote provider first when configured, local scorer
    /// otherwise. Remote failures degrade silently to the scorer; they are
    /// recorded in the request log only.
    pub fn ask(&self, query: &str) -> GuidanceResponse {
        let started = Instant::now();
        let request_id = Uuid::new_v4().to_string();

        if let Some(remote) = &self.remote {
            match remote.ask(query) {
                Ok(response) => {
                    self.log_request(&request_id, "ask", "ok", started, &response, None);
                    return response;
                }
                Err(err) => {
                    self.log_remote_degraded(&request_id, started, &err);
                }
            }
        }

        let response = self.engine.classify(&self.table, query);
        self.log_request(&request_id, "ask", "ok", started, &response, None);
        response
    }

    /// Scorer only; never consults the remote provider.
    pub fn classify(&self, query: &str) -> GuidanceResponse {
        let started = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        let response = self.engine.classify(&self.table, query);
        self.log_request(&request_id, "classify", "ok", started, &response, None);
        response
    }

    /// Scorer with the per-record score trace attached.
    pub fn classify_with_breakdown(&self, query: &str) -> (GuidanceResponse, ClassifyBreakdown) {
        let started = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        let (response, breakdown) = self.engine.classify_with_breakdown(&self.table, query);
        let details = serde_json::json!({ "phrase_bonus": breakdown.phrase_bonus });
        self.log_request(
            &request_id,
            "classify",
            "ok",
            started,
            &response,
            Some(details),
        );
        (response, breakdown)
    }

    pub fn topic(&self, key: &str) -> Result<&TopicRecord> {
        self.table
            .get(key)
            .ok_or_else(|| CounselError::NotFound(format!("topic: {key}")))
    }

    #[must_use]
    pub fn topics(&self) -> &[TopicRecord] {
        self.table.records()
    }

    #[must_use]
    pub fn provider_status(&self) -> String {
        match &self.remote {
            Some(remote) => format!("remote ({})", remote.model()),
            None => "rule-based scorer".to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            provider: self.provider_status(),
            topic_count: self.table.len(),
            table_source: self.table.source().to_string(),
        }
    }
}
