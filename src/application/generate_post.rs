//! Generate post use case

use crate::domain::{extract_section, scan_added_headings, select_heading, Post};
use crate::error::Result;
use crate::infrastructure::{DiffSource, SiteRepository};
use std::path::PathBuf;

/// Inputs for a single generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub before: String,
    pub after: String,
    /// Changelog path, relative to the repository root
    pub changelog: PathBuf,
    /// Posts directory, relative to the repository root
    pub posts_dir: PathBuf,
    pub author: String,
    pub tags: Vec<String>,
}

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// No new release heading in the diff
    NoHeading,
    /// A post for this release was already written
    AlreadyExists { post_path: PathBuf },
    /// A new post was written
    Created {
        post_path: PathBuf,
        release_date: String,
        release_title: String,
    },
}

impl PostOutcome {
    pub fn created(&self) -> bool {
        matches!(self, PostOutcome::Created { .. })
    }

    /// Key/value pairs reported to the CI workflow, in output order
    pub fn ci_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("created", self.created().to_string())];
        match self {
            PostOutcome::NoHeading => {}
            PostOutcome::AlreadyExists { post_path } => {
                pairs.push(("post_path", post_path.display().to_string()));
            }
            PostOutcome::Created {
                post_path,
                release_date,
                release_title,
            } => {
                pairs.push(("post_path", post_path.display().to_string()));
                pairs.push(("release_date", release_date.clone()));
                pairs.push(("release_title", release_title.clone()));
            }
        }
        pairs
    }
}

/// Service turning a newly added changelog release into a blog post
pub struct GeneratePostService<R, D> {
    repository: R,
    diff_source: D,
}

impl<R: SiteRepository, D: DiffSource> GeneratePostService<R, D> {
    /// Create a new generate post service
    pub fn new(repository: R, diff_source: D) -> Self {
        GeneratePostService {
            repository,
            diff_source,
        }
    }

    pub fn execute(&self, options: &GenerateOptions) -> Result<PostOutcome> {
        // 1. Scan the changelog diff for added release headings
        let diff = self
            .diff_source
            .diff(&options.before, &options.after, &options.changelog)?;
        let headings = scan_added_headings(&diff);
        tracing::debug!(count = headings.len(), "release headings added in diff");
        if headings.len() > 1 {
            tracing::warn!(
                count = headings.len(),
                "multiple release headings added; using the first in diff order"
            );
        }

        // 2. Pick one
        let Some(heading) = select_heading(headings) else {
            return Ok(PostOutcome::NoHeading);
        };
        tracing::info!(date = %heading.date, title = %heading.title, "selected release heading");

        // 3. Skip if the post is already there
        let post_path = options.posts_dir.join(Post::file_name(&heading));
        if self.repository.exists(&post_path) {
            return Ok(PostOutcome::AlreadyExists { post_path });
        }

        // 4. Extract the section and write the post
        let changelog_text = self.repository.read_text(&options.changelog)?;
        let section = extract_section(&changelog_text, &heading.raw)?;
        let post = Post::new(&heading, section, &options.author, &options.tags);
        let source = options.changelog.display().to_string();
        self.repository.write_text(&post_path, &post.render(&source))?;
        tracing::info!(path = %post_path.display(), "wrote post");

        Ok(PostOutcome::Created {
            post_path,
            release_date: heading.date,
            release_title: heading.title,
        })
    }
}
