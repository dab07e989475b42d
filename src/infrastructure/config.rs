//! Configuration management

use crate::error::{PostError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the repository root
pub const CONFIG_FILE: &str = ".changelog-post.toml";

pub const DEFAULT_CHANGELOG: &str = "docs/changelog.md";
pub const DEFAULT_POSTS_DIR: &str = "_posts";
pub const DEFAULT_AUTHOR: &str = "COO";
pub const DEFAULT_TAGS: [&str; 2] = ["release", "changelog"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Changelog path, relative to the repository root
    pub changelog: PathBuf,
    /// Output directory for posts, relative to the repository root
    pub posts_dir: PathBuf,
    pub author: String,
    pub tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog: PathBuf::from(DEFAULT_CHANGELOG),
            posts_dir: PathBuf::from(DEFAULT_POSTS_DIR),
            author: DEFAULT_AUTHOR.to_string(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load `.changelog-post.toml` from the given directory, or defaults if absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        match fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents, &config_path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(PostError::Io(e)),
        }
    }

    /// Load an explicitly named config file, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PostError::Config(format!("Config file not found: {}", path.display()))
            } else {
                PostError::Io(e)
            }
        })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, source: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            PostError::Config(format!("Failed to parse {}: {}", source.display(), e))
        })
    }
}
