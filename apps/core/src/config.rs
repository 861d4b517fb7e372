//! Extractor configuration.
//!
//! Values come from `STORYMETRICS_*` environment variables (a `.env` file is honored by the
//! binary through `dotenv`). Every field has a default except the story folder.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::features::metrics::DEFAULT_BRUNET_ALPHA;
use crate::features::tag_cache::TaggingCache;

pub const ENV_STORIES_DIR: &str = "STORYMETRICS_STORIES_DIR";
pub const ENV_SUBTLEX_PATH: &str = "STORYMETRICS_SUBTLEX_PATH";
pub const ENV_ZIPF_PATH: &str = "STORYMETRICS_ZIPF_PATH";
pub const ENV_OUTPUT_PATH: &str = "STORYMETRICS_OUTPUT_PATH";
pub const ENV_CACHE_CAPACITY: &str = "STORYMETRICS_CACHE_CAPACITY";
pub const ENV_BRUNET_ALPHA: &str = "STORYMETRICS_BRUNET_ALPHA";
pub const ENV_INCLUDE_TO: &str = "STORYMETRICS_INCLUDE_TO";

/// Settings for one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtractorConfig {
    /// Folder of per-character JSON story records.
    pub stories_dir: PathBuf,
    /// SUBTLEX-US CSV (`Word`, `SUBTLWF`); absent means the SUBTLWF feature stays at zero.
    pub subtlex_path: Option<PathBuf>,
    /// Zipf CSV (`Word`, `Zipf-value`); absent means the Zipf feature stays at zero.
    pub zipf_path: Option<PathBuf>,
    /// Report destination; stdout when absent.
    pub output_path: Option<PathBuf>,
    /// Number of tagged texts kept in memory.
    #[validate(range(min = 1))]
    pub cache_capacity: usize,
    /// Brunet index exponent.
    pub brunet_alpha: f64,
    /// Count TO tags as adpositions.
    pub include_to: bool,
}

impl ExtractorConfig {
    /// Config for `stories_dir` with every other field at its default.
    pub fn new(stories_dir: impl Into<PathBuf>) -> Self {
        Self {
            stories_dir: stories_dir.into(),
            subtlex_path: None,
            zipf_path: None,
            output_path: None,
            cache_capacity: TaggingCache::DEFAULT_CAPACITY.get(),
            brunet_alpha: DEFAULT_BRUNET_ALPHA,
            include_to: true,
        }
    }

    /// Reads the configuration from the environment and validates it.
    pub fn from_env() -> Result<Self, AppError> {
        let stories_dir = env::var(ENV_STORIES_DIR)
            .map_err(|_| AppError::Config(format!("{} environment variable not set", ENV_STORIES_DIR)))?;

        let mut config = Self::new(stories_dir);
        config.subtlex_path = optional_path(ENV_SUBTLEX_PATH);
        config.zipf_path = optional_path(ENV_ZIPF_PATH);
        config.output_path = optional_path(ENV_OUTPUT_PATH);
        if let Some(capacity) = parse_var::<usize>(ENV_CACHE_CAPACITY)? {
            config.cache_capacity = capacity;
        }
        if let Some(alpha) = parse_var::<f64>(ENV_BRUNET_ALPHA)? {
            config.brunet_alpha = alpha;
        }
        if let Some(include_to) = parse_bool_var(ENV_INCLUDE_TO)? {
            config.include_to = include_to;
        }

        config.validate()?;
        if !config.brunet_alpha.is_finite() {
            return Err(AppError::Config(format!(
                "{} must be a finite number",
                ENV_BRUNET_ALPHA
            )));
        }
        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_path(name: &str) -> Option<PathBuf> {
    non_empty_var(name).map(PathBuf::from)
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    non_empty_var(name)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::Config(format!("{}='{}': {}", name, raw, e)))
        })
        .transpose()
}

fn parse_bool_var(name: &str) -> Result<Option<bool>, AppError> {
    non_empty_var(name)
        .map(|raw| match raw.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::Config(format!("{}='{}' is not a boolean", name, raw))),
        })
        .transpose()
}
