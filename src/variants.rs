//! Variant expansion: stem, case forms, and leetspeak per word token.

use std::collections::HashSet;

use crate::leet::expand_leet;
use crate::stem::Stemmer;

/// First letter uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Expand a single word token into its variant set: the token and its stem
/// (purely-alphabetic tokens only), each in lowercase/Capitalized/UPPERCASE
/// form, plus leetspeak spellings of the lowercase form.
///
/// Bases longer than `max_len` are skipped outright; every transform here
/// preserves length, and downstream stages only append, so such bases can
/// never yield a candidate within bounds. `cap` bounds the leet accumulator.
pub fn expand_word(
    word: &str,
    stemmer: &dyn Stemmer,
    max_len: usize,
    cap: usize,
) -> HashSet<String> {
    let mut bases: Vec<String> = vec![word.to_string()];
    if word.chars().all(|c| c.is_ascii_alphabetic()) {
        let stem = stemmer.stem(word);
        if !stem.is_empty() && stem != word.to_lowercase() {
            bases.push(stem);
        }
    }

    let mut variants = HashSet::new();
    for base in bases {
        if base.chars().count() > max_len {
            continue;
        }
        let lower = base.to_lowercase();
        variants.insert(capitalize(&base));
        variants.insert(base.to_uppercase());
        for leet in expand_leet(&lower, cap) {
            variants.insert(leet);
        }
        variants.insert(lower);
    }
    variants
}

/// Union of variant sets across all word tokens.
pub fn expand_words(
    words: &[String],
    stemmer: &dyn Stemmer,
    max_len: usize,
    cap: usize,
) -> HashSet<String> {
    let mut all = HashSet::new();
    for w in words {
        all.extend(expand_word(w, stemmer, max_len, cap));
        if all.len() >= cap {
            log::warn!("variant set reached cap ({cap}); dropping further expansion");
            break;
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::{IdentityStemmer, LightStemmer};

    #[test]
    fn case_forms_present() {
        let v = expand_word("alice", &IdentityStemmer, 12, 1000);
        assert!(v.contains("alice"));
        assert!(v.contains("Alice"));
        assert!(v.contains("ALICE"));
    }

    #[test]
    fn leet_applies_to_lowercase_form() {
        let v = expand_word("pass", &IdentityStemmer, 12, 1000);
        assert!(v.contains("p4ss"));
        assert!(v.contains("pa$s"));
        // Case forms are not leet-expanded.
        assert!(!v.contains("P4SS"));
    }

    #[test]
    fn stem_variant_added_for_alphabetic_words() {
        let v = expand_word("running", &LightStemmer, 12, 1000);
        assert!(v.contains("run"));
        assert!(v.contains("Run"));
        assert!(v.contains("RUN"));
        assert!(v.contains("running"));
    }

    #[test]
    fn mixed_token_gets_no_stem() {
        let with_stem = expand_word("abc123", &LightStemmer, 12, 1000);
        let without = expand_word("abc123", &IdentityStemmer, 12, 1000);
        assert_eq!(with_stem, without);
    }

    #[test]
    fn identity_stemmer_only_suppresses_stem_variants() {
        let a = expand_word("walked", &IdentityStemmer, 12, 1000);
        let b = expand_word("walked", &LightStemmer, 12, 1000);
        assert!(b.is_superset(&a));
        assert!(b.contains("walk"));
        assert!(!a.contains("walk"));
    }

    #[test]
    fn overlong_word_yields_nothing() {
        let v = expand_word("supercalifragilistic", &IdentityStemmer, 12, 1000);
        assert!(v.is_empty());
    }
}
