//! Leetspeak cartesian expansion.
//!
//! A fixed table maps certain lowercase letters to a short ordered list of
//! substitutes; every other character maps to itself. Expansion walks the
//! word left to right keeping an accumulator of prefixes, so the growth
//! factor per character is explicit (at most [`MAX_OPTIONS_PER_CHAR`]) and no
//! recursion is involved. A caller-supplied cap bounds the accumulator size
//! for adversarial inputs.

/// Substitution table. The first option of every mapped letter is the letter
/// itself, so the plain spelling is always among the results.
pub const LEET_MAP: &[(char, &[char])] = &[
    ('a', &['a', '@', '4']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '$', '5']),
    ('t', &['t', '7']),
];

/// Largest option-list length in [`LEET_MAP`].
pub const MAX_OPTIONS_PER_CHAR: usize = 3;

fn options_for(ch: char) -> Option<&'static [char]> {
    LEET_MAP
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, opts)| *opts)
}

/// Expand `word` into all leetspeak spellings, lowercasing it first.
///
/// The accumulator never exceeds `cap` entries: when multiplying in the next
/// character's options would overflow the cap, only the plain character is
/// appended for that position. Returns an empty vec for an empty word.
pub fn expand_leet(word: &str, cap: usize) -> Vec<String> {
    if word.is_empty() || cap == 0 {
        return Vec::new();
    }

    let mut acc: Vec<String> = vec![String::new()];
    for ch in word.to_lowercase().chars() {
        let opts: &[char] = match options_for(ch) {
            Some(opts) if acc.len() * opts.len() <= cap => opts,
            _ => {
                // Unmapped character, or the product would exceed the cap:
                // extend every prefix with the plain character only.
                for prefix in &mut acc {
                    prefix.push(ch);
                }
                continue;
            }
        };
        let mut next = Vec::with_capacity(acc.len() * opts.len());
        for prefix in &acc {
            for &op in opts {
                let mut s = String::with_capacity(prefix.len() + 1);
                s.push_str(prefix);
                s.push(op);
                next.push(s);
            }
        }
        acc = next;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_characters_contribute_factor_one() {
        let out = expand_leet("xyz", 1000);
        assert_eq!(out, vec!["xyz".to_string()]);
    }

    #[test]
    fn product_of_option_lengths() {
        // p(1) * a(3) * s(3) * s(3) = 27
        let out = expand_leet("pass", 1000);
        assert_eq!(out.len(), 27);
        assert!(out.contains(&"pass".to_string()));
        assert!(out.contains(&"p4ss".to_string()));
        assert!(out.contains(&"pa$s".to_string()));
        assert!(out.contains(&"pas5".to_string()));
    }

    #[test]
    fn lowercases_before_expanding() {
        let out = expand_leet("TO", 1000);
        assert_eq!(out.len(), 4);
        assert!(out.contains(&"to".to_string()));
        assert!(out.contains(&"70".to_string()));
    }

    #[test]
    fn cap_bounds_accumulator_size() {
        let long: String = "assassinates".repeat(8);
        let out = expand_leet(&long, 64);
        assert!(!out.is_empty());
        assert!(out.len() <= 64);
        // The plain spelling survives capping.
        assert!(out.contains(&long));
    }

    #[test]
    fn empty_word_yields_nothing() {
        assert!(expand_leet("", 1000).is_empty());
    }
}
