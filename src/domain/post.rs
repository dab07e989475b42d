//! Blog post document built from a release section

use crate::domain::heading::ReleaseHeading;
use crate::domain::slug::slugify;

/// Extension of generated post files
pub const POST_EXTENSION: &str = "md";

/// Parse a comma-separated tag list, dropping empty items.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A rendered release blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl Post {
    /// Build a post for a release heading and its extracted section
    pub fn new(heading: &ReleaseHeading, body: String, author: &str, tags: &[String]) -> Self {
        Post {
            title: heading.title.clone(),
            description: format!("Release notes for {}: {}.", heading.date, heading.title),
            date: heading.date.clone(),
            author: author.to_string(),
            tags: tags.to_vec(),
            body,
        }
    }

    /// File name of the post: `<date>-<slug>.md`
    pub fn file_name(heading: &ReleaseHeading) -> String {
        format!(
            "{}-{}.{}",
            heading.date,
            slugify(&heading.title),
            POST_EXTENSION
        )
    }

    /// Tags as a bracketed, double-quoted list: `["a", "b"]`
    fn tags_list(&self) -> String {
        let quoted: Vec<String> = self.tags.iter().map(|t| format!("\"{}\"", t)).collect();
        format!("[{}]", quoted.join(", "))
    }

    /// Render the full document: front-matter followed by the release notes.
    ///
    /// `source` names the changelog file in the generated-from notice.
    pub fn render(&self, source: &str) -> String {
        let lines = [
            "---".to_string(),
            format!("title: \"{}\"", self.title),
            format!("description: \"{}\"", self.description),
            format!("date: {}", self.date),
            format!("author: \"{}\"", self.author),
            format!("tags: {}", self.tags_list()),
            "---".to_string(),
            String::new(),
            format!("# {}", self.title),
            String::new(),
            format!("This post was automatically generated from `{}`.", source),
            String::new(),
            "## Release Notes".to_string(),
            String::new(),
            self.body.trim_end().to_string(),
            String::new(),
        ];
        lines.join("\n")
    }
}
