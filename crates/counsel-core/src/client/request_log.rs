use std::fs;
use std::io::Write;
use std::time::Instant;

use chrono::Utc;

use crate::error::CounselError;
use crate::models::{GuidanceResponse, RequestLogEntry};

use super::Counsel;

pub(super) const REQUEST_LOG_FILE: &str = "requests.jsonl";

impl Counsel {
    /// Best-effort JSONL append under `<root>/logs/`. A failed log write
    /// never fails the request.
    pub(super) fn try_log_request(&self, entry: &RequestLogEntry) {
        let Ok(serialized) = serde_json::to_string(entry) else {
            return;
        };
        let dir = self.root.join("logs");
        if fs::create_dir_all(&dir).is_err() {
            return;
        }
        let Ok(mut file) = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(REQUEST_LOG_FILE))
        else {
            return;
        };
        let mut line = serialized;
        line.push('\n');
        let _ = file.write_all(line.as_bytes());
    }

    pub(super) fn log_request(
        &self,
        request_id: &str,
        operation: &str,
        status: &str,
        started: Instant,
        response: &GuidanceResponse,
        details: Option<serde_json::Value>,
    ) {
        self.try_log_request(&RequestLogEntry {
            request_id: request_id.to_string(),
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            matched_key: response.matched_key.clone(),
            error_message: None,
            details,
        });
    }

    pub(super) fn log_remote_degraded(
        &self,
        request_id: &str,
        started: Instant,
        err: &CounselError,
    ) {
        self.try_log_request(&RequestLogEntry {
            request_id: request_id.to_string(),
            operation: "ask".to_string(),
            status: "remote_degraded".to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            matched_key: None,
            error_message: Some(format!("{}: {err}", err.code())),
            details: None,
        });
    }
}
