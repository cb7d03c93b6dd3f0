/// Lower-cases and trims a raw query. Scoring operates on this form only.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whitespace-separated words strictly longer than `min_len` characters.
/// Punctuation is kept attached; overlap checks are plain substring tests.
#[must_use]
pub fn overlap_words(query: &str, min_len: usize) -> Vec<&str> {
    query
        .split_whitespace()
        .filter(|word| word.chars().count() > min_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_query_lowercases_and_trims() {
        assert_eq!(normalize_query("  What IS Bail \n"), "what is bail");
    }

    #[test]
    fn overlap_words_keeps_only_words_strictly_longer_than_min() {
        let words = overlap_words("what is bail and surety?", 3);
        assert_eq!(words, vec!["what", "bail", "surety?"]);
    }

    #[test]
    fn overlap_words_is_empty_for_blank_input() {
        assert!(overlap_words("   ", 3).is_empty());
    }
}
