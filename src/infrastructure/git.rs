//! Changelog diffs from the system git binary

use crate::error::{PostError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of textual diffs for a single file between two revisions
pub trait DiffSource {
    fn diff(&self, before: &str, after: &str, path: &Path) -> Result<String>;
}

/// Runs `git diff` in a repository working tree
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    work_tree: PathBuf,
}

impl GitDiffSource {
    pub fn new(work_tree: PathBuf) -> Self {
        GitDiffSource { work_tree }
    }
}

impl DiffSource for GitDiffSource {
    fn diff(&self, before: &str, after: &str, path: &Path) -> Result<String> {
        let range = format!("{}..{}", before, after);
        let command = format!("git diff {} -- {}", range, path.display());
        tracing::debug!(%command, work_tree = %self.work_tree.display(), "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.work_tree)
            .args(["diff", "--no-color", "--no-ext-diff", &range, "--"])
            .arg(path)
            .output()
            .map_err(|e| PostError::Git {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PostError::Git {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
