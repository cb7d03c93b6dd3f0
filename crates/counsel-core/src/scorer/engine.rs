use std::cmp::Ordering;

use crate::fallback;
use crate::models::{ClassifyBreakdown, GuidanceResponse, ResponseSource, TopicRecord, TopicScore};
use crate::table::TopicTable;
use crate::text::{normalize_query, overlap_words};

use super::config::ScorerConfig;
use super::phrases::{is_legal_keyword, looks_like_statute_reference, phrase_bonus};

/// Pure keyword-relevance scorer: maps a free-text query to the best-matching
/// topic record, or to the composed fallback when nothing scores above zero.
/// Deterministic for a fixed table and query; no I/O, no hidden state.
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    config: ScorerConfig,
}

impl RelevanceEngine {
    #[must_use]
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    #[must_use]
    pub fn classify(&self, table: &TopicTable, query: &str) -> GuidanceResponse {
        self.classify_with_breakdown(table, query).0
    }

    /// Same as `classify`, plus the per-record score trace.
    #[must_use]
    pub fn classify_with_breakdown(
        &self,
        table: &TopicTable,
        query: &str,
    ) -> (GuidanceResponse, ClassifyBreakdown) {
        let normalized = normalize_query(query);
        let words = overlap_words(&normalized, self.config.min_overlap_word_len);

        // Phrase weights are query-only features: every record gets the same
        // bonus, so it shifts confidence but never which record wins.
        let phrase_bonus = phrase_bonus(&normalized);

        let mut best: Option<(&TopicRecord, u32)> = None;
        let mut scores = Vec::with_capacity(table.len());
        for record in table.records() {
            let score = self.score_record(record, &normalized, &words);
            scores.push(TopicScore {
                key: record.key.clone(),
                score,
            });
            // Strictly greater: on ties the earlier record keeps the win.
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((record, score));
            }
        }
        sort_scores_desc_then_key(&mut scores);

        let breakdown = ClassifyBreakdown {
            phrase_bonus,
            scores,
        };

        let response = match best {
            Some((record, base)) if base + phrase_bonus > 0 => {
                let score = base + phrase_bonus;
                GuidanceResponse {
                    response_text: record.response_text.clone(),
                    citation: record.citation.clone(),
                    confidence: (score as f32 / self.config.confidence_divisor).min(1.0),
                    source: ResponseSource::Scorer,
                    matched_key: Some(record.key.clone()),
                }
            }
            _ => fallback::compose(query, self.config.fallback_confidence),
        };

        (response, breakdown)
    }

    fn score_record(&self, record: &TopicRecord, query: &str, words: &[&str]) -> u32 {
        let weights = &self.config;
        let mut score = 0;

        if query.contains(record.key.as_str()) {
            score += weights.key_match_weight;
        }

        for keyword in &record.keywords {
            if query.contains(keyword.as_str()) {
                score += if is_legal_keyword(keyword) {
                    weights.legal_keyword_weight
                } else {
                    weights.keyword_weight
                };
            }
        }

        let statute_context = record.key.contains("ipc") || record.key.contains("section");
        for word in words {
            if record.key.contains(word) || record.keywords.iter().any(|k| k.contains(word)) {
                score += weights.word_overlap_weight;
            }
            if statute_context && looks_like_statute_reference(word) {
                score += weights.section_reference_weight;
            }
        }

        score
    }
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

fn sort_scores_desc_then_key(scores: &mut [TopicScore]) {
    scores.sort_by(|a, b| match b.score.cmp(&a.score) {
        Ordering::Equal => a.key.cmp(&b.key),
        other => other,
    });
}
