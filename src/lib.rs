//! changelog-post - Release blog posts from changelog diffs
//!
//! Detects a release heading newly added to the changelog between two git
//! revisions, extracts that release's notes and writes them out as a blog
//! post with front-matter, at most once per release.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PostError;
