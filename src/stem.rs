//! Stemming capability for variant expansion.
//!
//! Stemming is an injected capability: the engine takes any [`Stemmer`] at
//! construction and behaves identically minus the extra stem variants when
//! given [`IdentityStemmer`]. The default [`LightStemmer`] handles simple
//! English morphology (plurals, `-ing`, `-ed`); it is deliberately not a full
//! Porter implementation.

/// A single-operation stemming interface. Implementations must be pure:
/// same input, same output.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// No-op stemmer. Using it disables stem variants without changing any other
/// engine behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Suffix-stripping English stemmer. Works on the lowercased word.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightStemmer;

impl Stemmer for LightStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if lower.ends_with("ies") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("es") && lower.len() > 3 {
            let stem = &lower[..lower.len() - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
                || stem.ends_with('o')
            {
                return stem.to_string();
            }
        }
        if lower.ends_with("ing") && lower.len() > 5 {
            let stem = &lower[..lower.len() - 3];
            if ends_with_doubled_consonant(stem) {
                return stem[..stem.len() - 1].to_string();
            }
            return stem.to_string();
        }
        if lower.ends_with("ied") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("ed") && lower.len() > 4 {
            let stem = &lower[..lower.len() - 2];
            if ends_with_doubled_consonant(stem) {
                return stem[..stem.len() - 1].to_string();
            }
            return stem.to_string();
        }
        if lower.ends_with('s') && lower.len() > 2 && !lower.ends_with("ss") {
            return lower[..lower.len() - 1].to_string();
        }

        lower
    }
}

fn ends_with_doubled_consonant(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        [.., a, b] => a == b && !matches!(*b, 'a' | 'e' | 'i' | 'o' | 'u'),
        _ => false,
    }
}
