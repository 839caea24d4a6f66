//! Seed token model and normalization.
//!
//! Raw seeds (names, pets, years) are trimmed, stripped of everything that is
//! not an ASCII letter or digit, and classified as either a word or a number.
//! A mixed token like `abc123` is kept whole and classified as a word; it is
//! never split into separate word/number parts.

/// A cleaned seed string, classified by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeedToken {
    Word(String),
    Number(String),
}

impl SeedToken {
    /// The cleaned text regardless of classification.
    pub fn text(&self) -> &str {
        match self {
            SeedToken::Word(s) | SeedToken::Number(s) => s,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, SeedToken::Number(_))
    }
}

/// Normalize a single raw seed. Returns `None` when nothing usable remains
/// after trimming and stripping non-alphanumeric characters.
pub fn normalize_seed(raw: &str) -> Option<SeedToken> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.chars().all(|c| c.is_ascii_digit()) {
        Some(SeedToken::Number(cleaned))
    } else {
        Some(SeedToken::Word(cleaned))
    }
}

/// Normalize a batch of raw seeds into word and number sequences, in order of
/// first appearance. Duplicates pass through here; downstream stages dedup
/// via set membership.
pub fn normalize_seeds<S: AsRef<str>>(seeds: &[S]) -> (Vec<String>, Vec<String>) {
    let mut words = Vec::new();
    let mut numbers = Vec::new();
    for raw in seeds {
        match normalize_seed(raw.as_ref()) {
            Some(SeedToken::Word(w)) => words.push(w),
            Some(SeedToken::Number(n)) => numbers.push(n),
            None => {}
        }
    }
    (words, numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_classifies() {
        assert_eq!(
            normalize_seed("  al-ice! "),
            Some(SeedToken::Word("alice".to_string()))
        );
        assert_eq!(
            normalize_seed("19.97"),
            Some(SeedToken::Number("1997".to_string()))
        );
    }

    #[test]
    fn mixed_alphanumeric_stays_whole_word() {
        let tok = normalize_seed("abc123").unwrap();
        assert_eq!(tok, SeedToken::Word("abc123".to_string()));
        assert!(!tok.is_number());
    }

    #[test]
    fn discards_empty_and_symbol_only() {
        assert_eq!(normalize_seed("   "), None);
        assert_eq!(normalize_seed("!!--!!"), None);
    }

    #[test]
    fn batch_preserves_order_and_duplicates() {
        let (words, numbers) = normalize_seeds(&["alice", "1997", "toby", "alice", ""]);
        assert_eq!(words, vec!["alice", "toby", "alice"]);
        assert_eq!(numbers, vec!["1997"]);
    }

    #[test]
    fn unicode_letters_are_stripped() {
        // Only ASCII alphanumerics survive normalization.
        assert_eq!(
            normalize_seed("zoë"),
            Some(SeedToken::Word("zo".to_string()))
        );
    }
}
