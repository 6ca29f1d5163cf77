//! CLI library components for the wellness travel recommender.

pub mod answers;
pub mod logging;
