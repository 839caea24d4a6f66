//! Export helpers for writing results to disk.
//!
//! - `save_wordlist_txt` writes one candidate per line, UTF-8, with no
//!   trailing blank line.
//! - `save_analysis_json` writes a timestamped JSON envelope of per-password
//!   analysis results.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analyzer::Analysis;

/// A password together with its strength report, as emitted in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedPassword {
    pub password: String,
    pub analysis: Analysis,
}

#[derive(Serialize)]
struct AnalysisEnvelope<'a> {
    timestamp: String,
    results: &'a [AnalyzedPassword],
}

pub fn save_wordlist_txt<P: AsRef<Path>>(words: &[String], path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    let mut w = BufWriter::new(file);
    for word in words {
        writeln!(w, "{word}")?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_analysis_json<P: AsRef<Path>>(results: &[AnalyzedPassword], path: P) -> Result<()> {
    let envelope = AnalysisEnvelope {
        timestamp: chrono::Utc::now().to_rfc3339(),
        results,
    };
    let file = File::create(&path)
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &envelope)?;
    Ok(())
}

/// Serialize the analysis envelope to a JSON string (stdout path of the CLI).
pub fn analysis_json_string(results: &[AnalyzedPassword]) -> Result<String> {
    let envelope = AnalysisEnvelope {
        timestamp: chrono::Utc::now().to_rfc3339(),
        results,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}
