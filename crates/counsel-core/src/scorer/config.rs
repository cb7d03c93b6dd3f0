/// Tuning weights for the relevance scorer. The defaults reproduce the
/// long-standing heuristic profile; treat them as knobs, not semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    /// Bonus when the record key appears verbatim in the query.
    pub key_match_weight: u32,
    /// Per matching keyword that carries a legal-term marker.
    pub legal_keyword_weight: u32,
    /// Per matching keyword without a marker.
    pub keyword_weight: u32,
    /// Per query word found inside the key or a keyword.
    pub word_overlap_weight: u32,
    /// Per statute-number word when the key is a statute reference.
    pub section_reference_weight: u32,
    /// Words must be strictly longer than this to count for overlap.
    pub min_overlap_word_len: usize,
    /// Winning confidence = min(score / divisor, 1.0).
    pub confidence_divisor: f32,
    /// Confidence reported on the no-match fallback branch.
    pub fallback_confidence: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            key_match_weight: 15,
            legal_keyword_weight: 8,
            keyword_weight: 5,
            word_overlap_weight: 3,
            section_reference_weight: 5,
            min_overlap_word_len: 3,
            confidence_divisor: 10.0,
            fallback_confidence: 0.3,
        }
    }
}
