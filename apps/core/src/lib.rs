//! StoryMetrics core: per-text linguistic complexity features for longitudinal
//! comparison of a subject's narrative samples.

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod report;
pub mod stories;

#[cfg(test)]
mod tests;

pub use error::AppError;
