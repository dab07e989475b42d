//! Changelog section extraction

use crate::error::{PostError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Marker that starts every top-level release section
const SECTION_MARKER: &str = "## ";

fn dated_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^##\s+([0-9]{4}-[0-9]{2}-[0-9]{2})\s+—\s+.*$").unwrap())
}

/// Find the line index of a heading, first verbatim, then by its date.
fn find_heading(lines: &[&str], heading_line: &str) -> Result<usize> {
    if let Some(index) = lines.iter().position(|line| *line == heading_line) {
        return Ok(index);
    }

    let not_found = || PostError::HeadingNotFound(heading_line.to_string());

    // Whitespace may differ between the diff and the file; match on date instead.
    let caps = dated_heading_regex()
        .captures(heading_line)
        .ok_or_else(not_found)?;
    let pattern = Regex::new(&format!(
        r"^##\s+{}\s+—\s+.*$",
        regex::escape(&caps[1])
    ))
    .map_err(|_| not_found())?;

    tracing::debug!(date = &caps[1], "heading not found verbatim, matching by date");
    lines
        .iter()
        .position(|line| pattern.is_match(line))
        .ok_or_else(not_found)
}

/// Extract the body of the section that starts at `heading_line`.
///
/// The body runs until the next top-level heading or the end of the text.
/// Blank lines are trimmed at both ends and the result always ends with a
/// single newline.
pub fn extract_section(changelog: &str, heading_line: &str) -> Result<String> {
    let lines: Vec<&str> = changelog.lines().collect();
    let start = find_heading(&lines, heading_line)?;

    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| !line.starts_with(SECTION_MARKER))
        .copied()
        .collect();

    let first = body.iter().position(|line| !line.trim().is_empty());
    let last = body.iter().rposition(|line| !line.trim().is_empty());
    let trimmed = match (first, last) {
        (Some(first), Some(last)) => &body[first..=last],
        _ => &[][..],
    };

    Ok(format!("{}\n", trimmed.join("\n").trim_end()))
}
