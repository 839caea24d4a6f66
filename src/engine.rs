//! Engine: orchestrates the candidate pipeline from raw seeds to a sorted,
//! deduplicated wordlist. The pipeline is pure and single-threaded; identical
//! seeds and options produce byte-identical output.
//!
//! Stages, composed left to right: seed normalization, variant expansion,
//! pattern composition, suffix augmentation, final filter. Each stage's
//! output set is consumed whole by the next; nothing flows backwards.
//!
//! Typical usage:
//!
//! ```
//! use wordforge::engine::{Generator, GeneratorOptions};
//! let generator = Generator::new(GeneratorOptions::default());
//! let words = generator.generate(&["alice".to_string(), "1997".to_string()]);
//! assert!(words.binary_search(&"alice1997".to_string()).is_ok());
//! ```

use crate::patterns::compose;
use crate::seed::normalize_seeds;
use crate::stem::{LightStemmer, Stemmer};
use crate::variants::expand_words;

/// Generic suffixes appended to every candidate that stays within bounds.
pub const COMMON_SUFFIXES: [&str; 4] = ["123", "!", "99", "007"];

/// Minimum candidate length; anything shorter is filtered out at the end.
pub const MIN_CANDIDATE_LEN: usize = 3;

/// Default maximum candidate length.
pub const DEFAULT_MAX_LENGTH: usize = 12;

/// Default cap on intermediate set size. Expansion and composition are
/// combinatorial; the cap guarantees bounded memory on adversarial input.
pub const DEFAULT_MAX_CANDIDATES: usize = 250_000;

/// Tuning knobs for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Maximum candidate length. Values below [`MIN_CANDIDATE_LEN`] yield an
    /// empty wordlist; that is expected, not an error.
    pub max_length: usize,
    /// Reserved hook for a caller-supplied post-processing transform. With
    /// `None` or an empty string the engine behaves as if no hook exists.
    pub rules: Option<String>,
    /// Upper bound on each intermediate set's size.
    pub max_candidates: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            rules: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Wordlist generator with an injected stemming capability.
pub struct Generator {
    stemmer: Box<dyn Stemmer>,
    options: GeneratorOptions,
}

impl Generator {
    /// Generator with the default light English stemmer.
    pub fn new(options: GeneratorOptions) -> Self {
        Self::with_stemmer(options, Box::new(LightStemmer))
    }

    /// Generator with an explicit stemming capability.
    pub fn with_stemmer(options: GeneratorOptions, stemmer: Box<dyn Stemmer>) -> Self {
        Self { stemmer, options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Run the full pipeline. Returns a lexicographically sorted, duplicate-
    /// free candidate list; empty or all-discarded seeds return an empty vec.
    pub fn generate<S: AsRef<str>>(&self, seeds: &[S]) -> Vec<String> {
        let max_len = self.options.max_length;
        let cap = self.options.max_candidates.max(1);

        if let Some(rules) = &self.options.rules {
            if !rules.is_empty() {
                log::debug!("rules hook present but not interpreted: {rules:?}");
            }
        }

        let (words, numbers) = normalize_seeds(seeds);
        log::debug!(
            "normalized {} seed(s) into {} word(s), {} number(s)",
            seeds.len(),
            words.len(),
            numbers.len()
        );

        let variants = expand_words(&words, self.stemmer.as_ref(), max_len, cap);
        let mut candidates = compose(&variants, &numbers, max_len, cap);

        // Suffix augmentation iterates over a snapshot; the set is being
        // extended and mutation during iteration must not be observed.
        let snapshot: Vec<String> = candidates.iter().cloned().collect();
        for c in &snapshot {
            for suf in COMMON_SUFFIXES {
                if candidates.len() >= cap {
                    break;
                }
                if c.chars().count() + suf.len() <= max_len {
                    candidates.insert(format!("{c}{suf}"));
                }
            }
        }

        // Baseline seeds are re-inserted so they survive regardless of what
        // the earlier stages produced.
        for w in &words {
            candidates.insert(w.to_lowercase());
        }
        for n in &numbers {
            candidates.insert(n.clone());
        }

        let mut out: Vec<String> = candidates
            .into_iter()
            .filter(|c| {
                let len = c.chars().count();
                len >= MIN_CANDIDATE_LEN && len <= max_len && !c.trim().is_empty()
            })
            .collect();
        out.sort();
        out
    }
}

/// One-shot convenience wrapper around [`Generator::new`].
pub fn generate<S: AsRef<str>>(seeds: &[S], options: GeneratorOptions) -> Vec<String> {
    Generator::new(options).generate(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::IdentityStemmer;

    fn opts(max_length: usize) -> GeneratorOptions {
        GeneratorOptions {
            max_length,
            ..GeneratorOptions::default()
        }
    }

    fn run(seeds: &[&str], max_length: usize) -> Vec<String> {
        generate(seeds, opts(max_length))
    }

    #[test]
    fn scenario_name_and_year() {
        let out = run(&["alice", "1997"], 12);
        for expected in [
            "alice",
            "1997",
            "alice1997",
            "1997alice",
            "alice_1997",
            "alice!",
            "!alice",
        ] {
            assert!(out.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn scenario_leet_variants() {
        let out = run(&["pass"], 12);
        assert!(out.iter().any(|c| c == "p4ss" || c == "pa$s" || c == "pas5"));
        assert!(out.iter().all(|c| c.chars().count() <= 12));
    }

    #[test]
    fn scenario_tight_length_bound() {
        let out = run(&["bob"], 3);
        assert!(out.contains(&"bob".to_string()));
        assert!(out.iter().all(|c| c.chars().count() == 3));
    }

    #[test]
    fn scenario_no_seeds() {
        let out = run(&[], 12);
        assert!(out.is_empty());
    }

    #[test]
    fn scenario_number_only_seed() {
        let out = run(&["2024"], 12);
        assert!(out.contains(&"2024".to_string()));
    }

    #[test]
    fn length_invariant_and_ordering() {
        let out = run(&["alice", "toby", "1997"], 10);
        assert!(out.iter().all(|c| (3..=10).contains(&c.chars().count())));
        assert!(out.windows(2).all(|w| w[0] < w[1]), "strictly ascending");
    }

    #[test]
    fn idempotent() {
        let a = run(&["alice", "1997"], 12);
        let b = run(&["alice", "1997"], 12);
        assert_eq!(a, b);
    }

    #[test]
    fn baseline_tokens_survive_lowercased() {
        let out = run(&["ALICE", "Toby!"], 12);
        assert!(out.contains(&"alice".to_string()));
        assert!(out.contains(&"toby".to_string()));
    }

    #[test]
    fn sub_minimum_length_option_yields_empty() {
        assert!(run(&["alice"], 2).is_empty());
        assert!(run(&["alice"], 0).is_empty());
    }

    #[test]
    fn suffixes_respect_length_bound() {
        let out = run(&["alice"], 7);
        // alice + 123 is 8 chars, over the bound; alice + 99 fits.
        assert!(!out.contains(&"alice123".to_string()));
        assert!(out.contains(&"alice99".to_string()));
    }

    #[test]
    fn cap_bounds_output_size() {
        let options = GeneratorOptions {
            max_length: 12,
            rules: None,
            max_candidates: 500,
        };
        let seeds: Vec<String> = (0..50).map(|i| format!("seedword{i}")).collect();
        let out = generate(&seeds, options);
        // Suffixing and baseline re-insertion sit on top of the composition
        // cap, but the total stays the same order of magnitude.
        assert!(out.len() <= 500 + seeds.len());
    }

    #[test]
    fn rules_hook_is_inert() {
        let plain = run(&["alice"], 12);
        let with_rules = generate(
            &["alice"],
            GeneratorOptions {
                rules: Some("uppercase-all".to_string()),
                ..opts(12)
            },
        );
        assert_eq!(plain, with_rules);
    }

    #[test]
    fn identity_stemmer_output_is_subset() {
        let options = GeneratorOptions::default();
        let stemmed = Generator::new(options.clone()).generate(&["running"]);
        let identity =
            Generator::with_stemmer(options, Box::new(IdentityStemmer)).generate(&["running"]);
        let stemmed_set: std::collections::HashSet<_> = stemmed.iter().collect();
        assert!(identity.iter().all(|c| stemmed_set.contains(c)));
        assert!(stemmed.contains(&"run123".to_string()));
    }
}
