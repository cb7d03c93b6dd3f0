//! Optional remote guidance provider. When configured it is asked first and
//! any failure degrades to the local scorer; the provider never becomes a
//! hard dependency of a query.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::{CounselError, Result};
use crate::models::{GuidanceResponse, ResponseSource};

pub const REMOTE_CITATION: &str = "AI-generated guidance";
pub const REMOTE_CONFIDENCE: f32 = 0.9;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_MS: u64 = 15_000;
const KEY_PLACEHOLDER: &str = "your-openai-api-key-here";

const SYSTEM_PROMPT: &str = "You are an assistant with broad knowledge of Indian law. \
Answer with specific acts, sections, and article numbers where they apply, explain \
concepts in plain language, mention procedural steps and timelines, and always state \
that this is general legal information, not advice, and that a qualified professional \
should be consulted for specific matters.";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl RemoteConfig {
    /// Reads provider settings from the environment. `None` when no usable
    /// API key is set; a placeholder key counts as unset.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("COUNSEL_OPENAI_API_KEY")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|key| !key.is_empty() && key != KEY_PLACEHOLDER)?;

        let base_url = std::env::var("COUNSEL_OPENAI_URL")
            .ok()
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("COUNSEL_OPENAI_MODEL")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout_ms = std::env::var("COUNSEL_OPENAI_TIMEOUT_MS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Some(Self {
            api_key,
            base_url,
            model,
            timeout_ms,
        })
    }
}

#[derive(Clone)]
pub struct RemoteProvider {
    config: RemoteConfig,
    http: Client,
}

impl std::fmt::Debug for RemoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteProvider")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

impl RemoteProvider {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| CounselError::Validation(format!("invalid COUNSEL_OPENAI_API_KEY: {e}")))?;
        headers.insert(AUTHORIZATION, value);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { config, http })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn ask(&self, query: &str) -> Result<GuidanceResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            max_tokens: 800,
            temperature: 0.3,
        };

        let resp = self.http.post(url).json(&body).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CounselError::RemoteUnavailable(format!(
                "completion endpoint returned {status}"
            )));
        }

        let value = resp.json::<serde_json::Value>()?;
        let content = value
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| CounselError::RemoteUnavailable("empty completion".to_string()))?;

        Ok(GuidanceResponse {
            response_text: content.to_string(),
            citation: REMOTE_CITATION.to_string(),
            confidence: REMOTE_CONFIDENCE,
            source: ResponseSource::Remote,
            matched_key: None,
        })
    }
}
