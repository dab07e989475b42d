//! CLI argument definitions

use crate::application::GenerateOptions;
use crate::domain::parse_tags;
use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "changelog-post")]
#[command(
    about = "Generate a blog post from a newly-added changelog release heading",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Git revision before the push
    #[arg(long)]
    pub before: String,

    /// Git revision after the push
    #[arg(long)]
    pub after: String,

    /// Post author (default: COO)
    #[arg(long)]
    pub author: Option<String>,

    /// Comma-separated post tags (default: release,changelog)
    #[arg(long)]
    pub tags: Option<String>,

    /// Changelog file, relative to the repository root (default: docs/changelog.md)
    #[arg(long)]
    pub changelog: Option<PathBuf>,

    /// Posts directory, relative to the repository root (default: _posts)
    #[arg(long)]
    pub posts_dir: Option<PathBuf>,

    /// Repository root
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// File receiving key=value results for the CI workflow
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Config file (default: <repo>/.changelog-post.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over config values
    pub fn generate_options(&self, config: Config) -> GenerateOptions {
        GenerateOptions {
            before: self.before.clone(),
            after: self.after.clone(),
            changelog: self.changelog.clone().unwrap_or(config.changelog),
            posts_dir: self.posts_dir.clone().unwrap_or(config.posts_dir),
            author: self.author.clone().unwrap_or(config.author),
            tags: self
                .tags
                .as_deref()
                .map(parse_tags)
                .unwrap_or(config.tags),
        }
    }
}
