/// Markers that make a keyword count as a legal term and earn the higher
/// keyword weight.
pub(super) const LEGAL_TERM_MARKERS: &[&str] = &[
    "ipc", "crpc", "act", "section", "law", "legal", "court", "judge",
];

/// Fixed contextual phrases and their weights. These are query-level
/// features: every record sees the same bonus.
pub(super) const CONTEXT_PHRASES: &[(&str, u32)] = &[
    ("what is", 3),
    ("how to", 4),
    ("can i", 3),
    ("procedure for", 5),
    ("punishment for", 4),
    ("rights of", 4),
    ("law on", 5),
    ("section", 6),
    ("under which act", 7),
];

pub(super) fn is_legal_keyword(keyword: &str) -> bool {
    LEGAL_TERM_MARKERS
        .iter()
        .any(|marker| keyword.contains(marker))
}

pub(super) fn phrase_bonus(query: &str) -> u32 {
    CONTEXT_PHRASES
        .iter()
        .filter(|(phrase, _)| query.contains(phrase))
        .map(|(_, weight)| *weight)
        .sum()
}

/// True for words shaped like a statute number: one or more digits with at
/// most one trailing letter ("302", "498a").
pub(super) fn looks_like_statute_reference(word: &str) -> bool {
    let mut digits = 0usize;
    let mut trailing = None;
    for c in word.chars() {
        if c.is_ascii_digit() && trailing.is_none() {
            digits += 1;
            continue;
        }
        if trailing.is_some() {
            return false;
        }
        trailing = Some(c);
    }
    digits > 0 && trailing.is_none_or(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_keywords_are_marker_substrings() {
        assert!(is_legal_keyword("it act"));
        assert!(is_legal_keyword("crpc"));
        assert!(!is_legal_keyword("surety"));
    }

    #[test]
    fn phrase_bonus_sums_every_matching_phrase() {
        assert_eq!(phrase_bonus("what is the procedure for bail"), 3 + 5);
        assert_eq!(phrase_bonus("under which act does section 154 fall"), 7 + 6);
        assert_eq!(phrase_bonus("asdkjasdkj nonsense text"), 0);
    }

    #[test]
    fn statute_reference_shapes() {
        assert!(looks_like_statute_reference("302"));
        assert!(looks_like_statute_reference("498a"));
        assert!(!looks_like_statute_reference("bail"));
        assert!(!looks_like_statute_reference("a302"));
        assert!(!looks_like_statute_reference("302ab"));
        assert!(!looks_like_statute_reference(""));
    }
}
