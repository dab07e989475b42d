//! Infrastructure layer - External I/O and persistence

pub mod ci_output;
pub mod config;
pub mod git;
pub mod repository;

pub use ci_output::CiOutput;
pub use config::Config;
pub use git::{DiffSource, GitDiffSource};
pub use repository::{FileSystemRepository, SiteRepository};
