//! Release heading detection in changelog diffs

use regex::Regex;
use std::sync::OnceLock;

/// Title used for the not-yet-released section at the top of a changelog
pub const UNRELEASED: &str = "Unreleased";

/// Added heading line in diff output: `+## 2025-12-30 — Title`
fn added_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\+##\s+([0-9]{4}-[0-9]{2}-[0-9]{2})\s+—\s+(.*)\s*$").unwrap())
}

/// A dated release heading found in the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHeading {
    /// Release date as written in the heading (YYYY-MM-DD)
    pub date: String,
    /// Heading title after the em-dash separator
    pub title: String,
    /// The heading line as it appears in the changelog
    pub raw: String,
}

impl ReleaseHeading {
    pub fn new(date: String, title: String, raw: String) -> Self {
        ReleaseHeading { date, title, raw }
    }

    /// Parse a single added diff line into a heading.
    ///
    /// Returns `None` for anything that is not an added, dated, top-level
    /// heading, and for the `Unreleased` placeholder.
    pub fn from_added_line(line: &str) -> Option<Self> {
        if !line.starts_with("+## ") || line.starts_with("+## Unreleased") {
            return None;
        }

        let caps = added_heading_regex().captures(line)?;
        let title = caps[2].trim();
        if title == UNRELEASED {
            return None;
        }

        Some(ReleaseHeading::new(
            caps[1].to_string(),
            title.to_string(),
            line[1..].to_string(),
        ))
    }
}

/// Collect newly added release headings from diff text, in diff order.
pub fn scan_added_headings(diff: &str) -> Vec<ReleaseHeading> {
    diff.lines().filter_map(ReleaseHeading::from_added_line).collect()
}

/// Pick the heading to publish.
///
/// New sections are prepended near the top of the changelog, so the first
/// added heading in diff order is taken as the newest release.
pub fn select_heading(headings: Vec<ReleaseHeading>) -> Option<ReleaseHeading> {
    headings.into_iter().next()
}
