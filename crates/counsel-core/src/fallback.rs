//! Composes the no-match response. The scorer falls through to this when no
//! topic earns a positive score; the output is a designed answer, not an
//! error path.

use serde::Serialize;

use crate::models::{GuidanceResponse, ResponseSource};

pub const FALLBACK_CITATION: &str = "General Legal Guidance";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Definition,
    Procedure,
    Punishment,
    Rights,
    StatuteReference,
    General,
}

impl QuestionKind {
    /// First matching bucket wins; the probes run on the lower-cased query.
    #[must_use]
    pub fn detect(query: &str) -> Self {
        if query.contains("what is") || query.contains("define") {
            return Self::Definition;
        }
        if query.contains("how to") || query.contains("procedure") {
            return Self::Procedure;
        }
        if query.contains("punishment") || query.contains("penalty") {
            return Self::Punishment;
        }
        if query.contains("rights") || query.contains("can i") {
            return Self::Rights;
        }
        if query.contains("section") || query.contains("ipc") || query.contains("crpc") {
            return Self::StatuteReference;
        }
        Self::General
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

const HIGH_URGENCY_MARKERS: &[&str] = &[
    "urgent", "emergency", "immediate", "arrest", "custody", "notice", "summons", "deadline",
];

const MEDIUM_URGENCY_MARKERS: &[&str] = &["soon", "quickly", "fast", "time limit", "within days"];

impl Urgency {
    #[must_use]
    pub fn detect(query: &str) -> Self {
        if HIGH_URGENCY_MARKERS.iter().any(|m| query.contains(m)) {
            return Self::High;
        }
        if MEDIUM_URGENCY_MARKERS.iter().any(|m| query.contains(m)) {
            return Self::Medium;
        }
        Self::Low
    }
}

const AREA_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "criminal",
        &[
            "crime",
            "criminal",
            "police",
            "arrest",
            "bail",
            "fir",
            "ipc",
            "murder",
            "theft",
            "fraud",
            "cybercrime",
        ],
    ),
    (
        "civil",
        &[
            "contract",
            "property",
            "tort",
            "damages",
            "breach",
            "agreement",
            "sale",
            "purchase",
        ],
    ),
    (
        "family",
        &[
            "marriage",
            "divorce",
            "custody",
            "maintenance",
            "dowry",
            "domestic violence",
            "inheritance",
        ],
    ),
    (
        "constitutional",
        &[
            "fundamental rights",
            "constitution",
            "article",
            "writ",
            "habeas corpus",
            "mandamus",
        ],
    ),
    (
        "commercial",
        &[
            "company",
            "business",
            "gst",
            "tax",
            "partnership",
            "trademark",
            "copyright",
        ],
    ),
    (
        "labor",
        &[
            "employment",
            "termination",
            "salary",
            "workplace",
            "industrial dispute",
            "gratuity",
        ],
    ),
    (
        "consumer",
        &[
            "consumer",
            "deficiency",
            "service",
            "product",
            "warranty",
            "refund",
        ],
    ),
    (
        "environmental",
        &["environment", "pollution", "forest", "green", "clearance"],
    ),
    (
        "banking",
        &["bank", "loan", "deposit", "credit", "npa", "recovery"],
    ),
];

/// Legal areas whose keyword list overlaps the query, in table order. A
/// query may tag several areas.
#[must_use]
pub fn identify_areas(query: &str) -> Vec<&'static str> {
    AREA_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(area, _)| *area)
        .collect()
}

/// Builds the templated no-match payload for `original_query`. Confidence is
/// the caller's configured fallback constant.
#[must_use]
pub fn compose(original_query: &str, confidence: f32) -> GuidanceResponse {
    let query = original_query.trim().to_lowercase();
    let kind = QuestionKind::detect(&query);
    let areas = identify_areas(&query);
    let urgency = Urgency::detect(&query);

    let area_clause = if areas.is_empty() {
        String::new()
    } else {
        format!(" This appears to involve {} law.", areas.join(", "))
    };
    let urgency_clause = match urgency {
        Urgency::High => " This may be time-sensitive, so seek advice promptly.",
        Urgency::Medium | Urgency::Low => "",
    };

    let response_text = match kind {
        QuestionKind::Definition => format!(
            "No reference entry covers \"{original_query}\" directly.{area_clause} For a \
             precise definition and its legal implications, consult the bare act or a \
             qualified professional in this area.{urgency_clause}"
        ),
        QuestionKind::Procedure => format!(
            "No reference entry covers the procedure asked about in \
             \"{original_query}\".{area_clause} Procedures involve jurisdiction-specific \
             steps, timelines, and documentation, so a practicing lawyer should walk you \
             through them.{urgency_clause}"
        ),
        QuestionKind::Punishment => format!(
            "No reference entry covers the penalties asked about in \
             \"{original_query}\".{area_clause} Punishments depend on the specific offense, \
             its circumstances, and the applicable sections; check the relevant provisions \
             or consult a criminal law expert.{urgency_clause}"
        ),
        QuestionKind::Rights => format!(
            "No reference entry covers the rights asked about in \
             \"{original_query}\".{area_clause} Rights vary with circumstances and may \
             include constitutional, statutory, and common-law remedies; a legal expert can \
             assess your situation.{urgency_clause}"
        ),
        QuestionKind::StatuteReference => format!(
            "No reference entry covers the provision asked about in \
             \"{original_query}\".{area_clause} Interpreting statutory sections requires the \
             bare act, its amendments, and relevant case law; consult those sources or a \
             legal professional.{urgency_clause}"
        ),
        QuestionKind::General => format!(
            "No reference entry covers \"{original_query}\".{area_clause} This looks like a \
             question that needs detailed legal research, so consider consulting a \
             qualified legal professional.{urgency_clause}"
        ),
    };

    GuidanceResponse {
        response_text,
        citation: FALLBACK_CITATION.to_string(),
        confidence,
        source: ResponseSource::Fallback,
        matched_key: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_buckets_follow_first_match_order() {
        assert_eq!(QuestionKind::detect("what is a lease"), QuestionKind::Definition);
        assert_eq!(
            QuestionKind::detect("how to appeal a ruling"),
            QuestionKind::Procedure
        );
        assert_eq!(
            QuestionKind::detect("penalty for trespass"),
            QuestionKind::Punishment
        );
        assert_eq!(QuestionKind::detect("can i refuse a search"), QuestionKind::Rights);
        assert_eq!(
            QuestionKind::detect("crpc provisions on appeals"),
            QuestionKind::StatuteReference
        );
        assert_eq!(QuestionKind::detect("lease renewals"), QuestionKind::General);
        // "what is" outranks the statute bucket even when both match.
        assert_eq!(
            QuestionKind::detect("what is section 154"),
            QuestionKind::Definition
        );
    }

    #[test]
    fn urgency_prefers_high_markers_over_medium() {
        assert_eq!(Urgency::detect("urgent: reply soon"), Urgency::High);
        assert_eq!(Urgency::detect("need this quickly"), Urgency::Medium);
        assert_eq!(Urgency::detect("a calm question"), Urgency::Low);
    }

    #[test]
    fn identify_areas_tags_every_overlapping_area() {
        let areas = identify_areas("dowry complaint against employer termination");
        assert_eq!(areas, vec!["family", "labor"]);
        assert!(identify_areas("asdkjasdkj nonsense").is_empty());
    }

    #[test]
    fn compose_embeds_query_and_fixed_citation() {
        let response = compose("What about quantum leases?", 0.3);
        assert!(response.response_text.contains("What about quantum leases?"));
        assert_eq!(response.citation, FALLBACK_CITATION);
        assert_eq!(response.confidence, 0.3);
        assert_eq!(response.source, ResponseSource::Fallback);
        assert!(response.matched_key.is_none());
    }

    #[test]
    fn compose_adds_area_and_urgency_clauses() {
        let response = compose("urgent arrest and bail question with no match words", 0.3);
        assert!(response.response_text.contains("criminal"));
        assert!(response.response_text.contains("time-sensitive"));
    }
}
