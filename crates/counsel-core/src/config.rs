use std::path::PathBuf;

use crate::provider::RemoteConfig;
use crate::scorer::ScorerConfig;

pub const TOPICS_PATH_ENV: &str = "COUNSEL_TOPICS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scorer: ScorerConfig,
    pub table_path: Option<PathBuf>,
    pub remote: Option<RemoteConfig>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            scorer: scorer_config_from_env(),
            table_path: read_non_empty_env(TOPICS_PATH_ENV).map(PathBuf::from),
            remote: RemoteConfig::from_env(),
        }
    }
}

fn scorer_config_from_env() -> ScorerConfig {
    let defaults = ScorerConfig::default();
    ScorerConfig {
        key_match_weight: read_env_u32("COUNSEL_SCORER_KEY_MATCH")
            .unwrap_or(defaults.key_match_weight),
        legal_keyword_weight: read_env_u32("COUNSEL_SCORER_LEGAL_KEYWORD")
            .unwrap_or(defaults.legal_keyword_weight),
        keyword_weight: read_env_u32("COUNSEL_SCORER_KEYWORD").unwrap_or(defaults.keyword_weight),
        word_overlap_weight: read_env_u32("COUNSEL_SCORER_WORD_OVERLAP")
            .unwrap_or(defaults.word_overlap_weight),
        section_reference_weight: read_env_u32("COUNSEL_SCORER_SECTION_REFERENCE")
            .unwrap_or(defaults.section_reference_weight),
        min_overlap_word_len: defaults.min_overlap_word_len,
        confidence_divisor: read_env_f32("COUNSEL_SCORER_CONFIDENCE_DIVISOR")
            .filter(|divisor| *divisor > 0.0)
            .unwrap_or(defaults.confidence_divisor),
        fallback_confidence: defaults.fallback_confidence,
    }
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
fn read_env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
}

#[must_use]
fn read_env_f32(name: &str) -> Option<f32> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<f32>().ok())
}
