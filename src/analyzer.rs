//! Password strength analysis.
//!
//! Stateless collaborator of the wordlist engine: consumes a password string
//! (plus optional personal words so passwords built from known facts are
//! penalized harder) and returns a strength report. The primary engine is
//! `zxcvbn`; when it rejects the input a Shannon-entropy estimator takes
//! over. An empty password is a valid input, not an error.

use serde::Serialize;

/// Assumed offline attack rate for crack-time estimates.
const GUESSES_PER_SECOND: f64 = 1e9;

const LOG2_10: f64 = 3.321928094887362;

/// Strength labels indexed by score.
pub const STRENGTH_LABELS: [&str; 5] = ["Very Weak", "Weak", "Moderate", "Strong", "Very Strong"];

/// Strength report for a single password.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Which engine produced the report: `zxcvbn`, `entropy_fallback`, or
    /// `none` for an empty password.
    pub engine: String,
    /// 0 (very weak) ..= 4 (very strong).
    pub score: u8,
    pub strength: String,
    pub entropy_bits: Option<f64>,
    pub charset_estimate: Option<usize>,
    pub crack_time_seconds: Option<f64>,
    pub crack_time_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

fn label_for(score: u8) -> String {
    STRENGTH_LABELS
        .get(score as usize)
        .unwrap_or(&"Unknown")
        .to_string()
}

/// Shannon entropy of the whole string, in bits (per-character entropy times
/// length).
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let mut freq: std::collections::HashMap<char, usize> = std::collections::HashMap::new();
    for ch in password.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    let len = password.chars().count() as f64;
    let per_char: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum();
    per_char * len
}

/// Rough character-set size estimate from the classes in use.
pub fn charset_size(password: &str) -> usize {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        size += 32;
    }
    size
}

/// Render a duration as at most two leading units, e.g. `3 days, 4 hours`.
pub fn human_time(seconds: f64) -> String {
    if seconds.is_infinite() {
        return "infinite".to_string();
    }
    if seconds < 1.0 {
        return "<1 second".to_string();
    }
    const UNITS: [(&str, f64); 5] = [
        ("years", 3600.0 * 24.0 * 365.0),
        ("days", 3600.0 * 24.0),
        ("hours", 3600.0),
        ("minutes", 60.0),
        ("seconds", 1.0),
    ];
    let mut parts = Vec::new();
    let mut remaining = seconds;
    for (name, unit) in UNITS {
        if remaining >= unit {
            let v = (remaining / unit).floor();
            parts.push(format!("{} {}", v as u64, name));
            remaining -= v * unit;
        }
        if parts.len() >= 2 {
            break;
        }
    }
    parts.join(", ")
}

fn fallback_suggestions(password: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    if password.chars().count() < 8 {
        suggestions.push("Use at least 8 characters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        suggestions.push("Add uppercase letters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        suggestions.push("Add lowercase letters.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        suggestions.push("Add digits (0-9).".to_string());
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        suggestions.push("Add special characters (e.g. !@#$%).".to_string());
    }

    let lower = password.to_lowercase();
    const COMMON_WEAK: [&str; 4] = ["password", "123456", "qwerty", "letmein"];
    if COMMON_WEAK.contains(&lower.as_str()) || lower.contains("password") {
        suggestions.push("Avoid common passwords or obvious dictionary words.".to_string());
    }

    let len = lower.chars().count();
    let over_repeated = lower
        .chars()
        .collect::<std::collections::HashSet<_>>()
        .into_iter()
        .any(|ch| lower.chars().filter(|&c| c == ch).count() > len / 2);
    if over_repeated {
        suggestions.push("Avoid excessive repetition of the same character.".to_string());
    }
    suggestions
}

/// Estimator used when zxcvbn cannot score the input. Scores on fixed
/// entropy bands (20/40/60/80 bits).
pub fn entropy_fallback(password: &str) -> Analysis {
    let entropy = shannon_entropy(password);
    let guesses = if entropy > 0.0 { entropy.exp2() } else { 1.0 };
    let seconds = guesses / GUESSES_PER_SECOND;

    let score = match entropy {
        e if e < 20.0 => 0,
        e if e < 40.0 => 1,
        e if e < 60.0 => 2,
        e if e < 80.0 => 3,
        _ => 4,
    };

    Analysis {
        engine: "entropy_fallback".to_string(),
        score,
        strength: label_for(score),
        entropy_bits: Some((entropy * 100.0).round() / 100.0),
        charset_estimate: Some(charset_size(password)),
        crack_time_seconds: Some(seconds),
        crack_time_display: Some(human_time(seconds)),
        warning: None,
        suggestions: fallback_suggestions(password),
    }
}

/// Analyze a password, feeding `user_inputs` (name, pet, year) into zxcvbn so
/// candidates derived from personal facts are penalized.
pub fn analyze(password: &str, user_inputs: &[&str]) -> Analysis {
    if password.is_empty() {
        return Analysis {
            engine: "none".to_string(),
            score: 0,
            strength: label_for(0),
            entropy_bits: None,
            charset_estimate: None,
            crack_time_seconds: None,
            crack_time_display: None,
            warning: Some("Empty password".to_string()),
            suggestions: Vec::new(),
        };
    }

    match zxcvbn::zxcvbn(password, user_inputs) {
        Ok(estimate) => {
            let score = estimate.score();
            let guesses = estimate.guesses() as f64;
            let seconds = guesses / GUESSES_PER_SECOND;
            let (warning, suggestions) = match estimate.feedback() {
                Some(feedback) => (
                    feedback.warning().map(|w| w.to_string()),
                    feedback
                        .suggestions()
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                ),
                None => (None, Vec::new()),
            };
            Analysis {
                engine: "zxcvbn".to_string(),
                score,
                strength: label_for(score),
                entropy_bits: Some(estimate.guesses_log10() * LOG2_10),
                charset_estimate: Some(charset_size(password)),
                crack_time_seconds: Some(seconds),
                crack_time_display: Some(human_time(seconds)),
                warning,
                suggestions,
            }
        }
        Err(e) => {
            log::debug!("zxcvbn could not score input ({e}); using entropy fallback");
            entropy_fallback(password)
        }
    }
}
