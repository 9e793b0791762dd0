//! Reading candidate references from a file or stdin.

use anyhow::{Context, Result};
use classlight_core::CandidateReference;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Parse a JSON array of candidate references
pub fn parse_references(json: &str) -> Result<Vec<CandidateReference>> {
    serde_json::from_str(json).context("Invalid candidate reference JSON")
}

/// Read references from `path`, or from stdin when `path` is `None` or `-`
pub fn read_references(path: Option<&Path>) -> Result<Vec<CandidateReference>> {
    let contents = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read references from stdin")?;
            buffer
        }
    };

    let references = parse_references(&contents)?;
    tracing::debug!(count = references.len(), "Read candidate references");
    Ok(references)
}
