use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}").unwrap());
static CUE_JUNK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s:.>-]+$").unwrap());
static INLINE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Parse WebVTT subtitle content into plain text, removing duplicates.
///
/// Auto-generated captions repeat lines across overlapping cue windows for
/// the rolling effect, so each distinct line is kept only at its first
/// occurrence. A sentence legitimately spoken twice in the video is dropped
/// the second time as well; that fidelity trade-off is accepted.
pub fn parse_vtt(content: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut text_lines = Vec::new();

    for line in content.lines() {
        // Skip timestamps, headers, and empty lines
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("WEBVTT") {
            continue;
        }
        if line.starts_with("Kind:") || line.starts_with("Language:") {
            continue;
        }
        if TIMESTAMP_LINE.is_match(line) {
            continue;
        }
        if CUE_JUNK_LINE.is_match(line) {
            continue;
        }

        let clean = INLINE_TAG.replace_all(line, "");
        let clean = clean.trim();

        if !clean.is_empty() && seen.insert(clean.to_string()) {
            text_lines.push(clean.to_string());
        }
    }

    text_lines.join(" ")
}
