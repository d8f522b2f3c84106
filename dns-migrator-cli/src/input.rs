//! Zone list input

use std::path::Path;

use anyhow::{Context, Result};

/// Zone names, one per line. Lines are trimmed and blank lines skipped.
pub fn parse_zone_names(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read the zone list from `path`.
pub fn read_zone_names(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    Ok(parse_zone_names(&contents))
}
