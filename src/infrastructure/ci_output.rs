//! Key/value results for the calling CI workflow

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends `key=value` lines to the file named by `GITHUB_OUTPUT`.
///
/// Without a destination every write is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CiOutput {
    path: Option<PathBuf>,
}

impl CiOutput {
    /// An empty path counts as unset
    pub fn new(path: Option<PathBuf>) -> Self {
        CiOutput {
            path: path.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// Append all pairs in order
    pub fn write_all(&self, pairs: &[(&str, String)]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for (key, value) in pairs {
            writeln!(file, "{}={}", key, value)?;
        }
        Ok(())
    }
}
