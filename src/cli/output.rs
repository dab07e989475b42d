//! Output formatting utilities

use crate::application::PostOutcome;
use std::path::Path;

/// Format the one-line summary printed after a run
pub fn format_outcome(outcome: &PostOutcome, changelog: &Path) -> String {
    match outcome {
        PostOutcome::NoHeading => format!(
            "No new release heading detected in {}; skipping post generation.",
            changelog.display()
        ),
        PostOutcome::AlreadyExists { post_path } => {
            format!("Post already exists at {}; skipping.", post_path.display())
        }
        PostOutcome::Created { post_path, .. } => {
            format!("Generated post at {}", post_path.display())
        }
    }
}
