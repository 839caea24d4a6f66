use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file of one-entry-per-line values: trims each line and drops blank
/// ones. Used for seed files and password lists.
pub fn read_lines_trimmed<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(&path).with_context(|| format!("open {}", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("read {}", path.as_ref().display()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

/// Split a comma-separated argument into trimmed, non-empty parts.
pub fn split_csv_arg(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
