//! Error types for changelog-post

use thiserror::Error;

/// Main error type for changelog-post
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Release heading not found in changelog: {0}")]
    HeadingNotFound(String),

    #[error("Git command failed: {command}: {stderr}")]
    Git { command: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PostError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostError::Git { .. } => 2,
            PostError::HeadingNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PostError::HeadingNotFound(heading) => {
                format!(
                    "Release heading not found in changelog: '{}'\n\n\
                    The heading was added in the diff but is missing from the checked-out file.\n\
                    Suggestions:\n\
                    • Make sure --after matches the checked-out revision\n\
                    • Check that the heading uses an em-dash: ## YYYY-MM-DD — Title",
                    heading
                )
            }
            PostError::Git { command, stderr } => {
                format!(
                    "Git command failed: {}\n{}\n\n\
                    Suggestions:\n\
                    • Check that both --before and --after name existing revisions\n\
                    • Fetch enough history for both revisions (e.g., fetch-depth: 0)\n\
                    • Run from inside the repository or pass --repo",
                    command,
                    stderr.trim_end()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PostError
pub type Result<T> = std::result::Result<T, PostError>;
