//! Domain layer - Changelog parsing and post rendering

pub mod heading;
pub mod post;
pub mod section;
pub mod slug;

pub use heading::{scan_added_headings, select_heading, ReleaseHeading};
pub use post::{parse_tags, Post};
pub use section::extract_section;
pub use slug::slugify;
