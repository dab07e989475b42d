//! File system access to the changelog and posts directory

use crate::error::{PostError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for the files a run reads and writes
pub trait SiteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from the root, falling back to defaults
    fn load_config(&self) -> Result<Config>;

    /// Read a text file relative to the root
    fn read_text(&self, relative: &Path) -> Result<String>;

    /// Check whether a file exists relative to the root
    fn exists(&self, relative: &Path) -> bool;

    /// Write a new file relative to the root, creating parent directories
    fn write_text(&self, relative: &Path, content: &str) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn read_text(&self, relative: &Path) -> Result<String> {
        fs::read_to_string(self.root.join(relative)).map_err(PostError::Io)
    }

    fn exists(&self, relative: &Path) -> bool {
        self.root.join(relative).exists()
    }

    fn write_text(&self, relative: &Path, content: &str) -> Result<()> {
        let path = self.root.join(relative);

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(PostError::Io)
    }
}
