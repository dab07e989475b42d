//! Application layer - Use cases and orchestration

pub mod generate_post;

pub use generate_post::{GenerateOptions, GeneratePostService, PostOutcome};
