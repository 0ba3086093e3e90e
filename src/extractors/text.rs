// src/extractors/text.rs
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{ExtractConfig, COUNT_MARKER};
use crate::extractors::Candidate;

// Matches "SkillName: 3 endorsements" with an optional "12. " or "12: "
// list-index prefix. The name class is deliberately restricted; lines that
// do not fit are data the text strategy simply cannot see.
static SKILL_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:\d+[.:]\s+)?([\w\s().,'-]+?):\s+(\d+)\s+{}s?",
        COUNT_MARKER
    ))
    .expect("Failed to compile skill line regex")
});

/// Extracts candidates by pattern-matching lines of flattened visible text.
///
/// Non-matching lines are ignored. Matched names that still look like
/// header or metadata words after normalization are rejected, since the
/// line pattern is permissive enough to match column headings.
pub fn extract_from_text(text: &str, config: &ExtractConfig) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for line in text.lines() {
        let caps = match SKILL_LINE_RE.captures(line) {
            Some(caps) => caps,
            None => continue,
        };

        let count = caps[2].parse::<u32>().unwrap_or(0);
        let candidate = Candidate::new(&caps[1], count);

        if config.is_noise_text_name(&candidate.name) {
            debug!("Rejecting noise line match: {}", candidate.raw_name);
            continue;
        }

        candidates.push(candidate);
    }

    candidates
}
