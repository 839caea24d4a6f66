//! Human-readable report rendering for terminal output.
//!
//! Produces a colored strength report per analyzed password: strength label
//! tinted by score, entropy, crack-time estimate, and feedback lines.
use colored::*;

use crate::analyzer::Analysis;

fn section_header(title: &str) -> String {
    let mut s = String::new();
    s.push('\n');
    s.push_str(title);
    s.push('\n');
    s.push_str(&"─".repeat(title.chars().count()));
    s.push('\n');
    s
}

fn strength_colored(analysis: &Analysis) -> ColoredString {
    let label = analysis.strength.as_str();
    match analysis.score {
        0 | 1 => label.red().bold(),
        2 => label.yellow().bold(),
        _ => label.green().bold(),
    }
}

/// Render a single analysis as a terminal report block.
pub fn render_analysis(password: &str, analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&section_header(
        &format!("Password: {password}").bold().cyan().to_string(),
    ));
    out.push_str(&format!("Engine: {}\n", analysis.engine));
    out.push_str(&format!(
        "Strength: {} (Score: {}/4)\n",
        strength_colored(analysis),
        analysis.score
    ));
    if let Some(bits) = analysis.entropy_bits {
        out.push_str(&format!("Entropy: {bits:.2} bits\n"));
    }
    if let Some(display) = &analysis.crack_time_display {
        out.push_str(&format!(
            "Estimated Crack Time: {display} (offline, 10^9 guesses/s)\n"
        ));
    }
    if let Some(warning) = &analysis.warning {
        out.push_str(&format!("Warning: {}\n", warning.yellow()));
    }
    if !analysis.suggestions.is_empty() {
        out.push_str("Suggestions:\n");
        for s in &analysis.suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    out
}

/// Render reports for a batch of `(password, analysis)` pairs.
pub fn render_batch(entries: &[(String, Analysis)]) -> String {
    let mut out = String::new();
    for (password, analysis) in entries {
        out.push_str(&render_analysis(password, analysis));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn report_contains_core_lines() {
        colored::control::set_override(false);
        let analysis = analyze("password", &[]);
        let text = render_analysis("password", &analysis);
        assert!(text.contains("Password: password"));
        assert!(text.contains("Strength:"));
        assert!(text.contains("Score: "));
    }

    #[test]
    fn batch_renders_every_entry() {
        colored::control::set_override(false);
        let entries = vec![
            ("abc".to_string(), analyze("abc", &[])),
            ("P@ssw0rd123!".to_string(), analyze("P@ssw0rd123!", &[])),
        ];
        let text = render_batch(&entries);
        assert!(text.contains("Password: abc"));
        assert!(text.contains("Password: P@ssw0rd123!"));
    }
}
