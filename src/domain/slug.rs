//! URL-safe slugs for post file names

use regex::Regex;
use std::sync::OnceLock;

/// Slug used when a title has no usable characters
pub const FALLBACK_SLUG: &str = "release";

fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap())
}

fn separator_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\s_-]+").unwrap())
}

fn hyphen_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Convert a title into a lowercase, hyphen-separated slug.
///
/// Never fails: a title with nothing left after filtering becomes
/// [`FALLBACK_SLUG`].
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let filtered = disallowed_regex().replace_all(&lowered, "");
    let separated = separator_run_regex().replace_all(&filtered, "-");
    let collapsed = hyphen_run_regex().replace_all(&separated, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}
