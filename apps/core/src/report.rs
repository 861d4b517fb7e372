//! Feature report written at the end of a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::error::AppError;
use crate::features::tag_cache::CacheStats;
use crate::stories::StoryFeatures;

/// All story rows of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    pub generated_at: DateTime<Utc>,
    pub story_count: usize,
    pub cache: CacheStats,
    pub stories: Vec<StoryFeatures>,
}

impl FeatureReport {
    pub fn new(stories: Vec<StoryFeatures>, cache: CacheStats) -> Self {
        Self {
            generated_at: Utc::now(),
            story_count: stories.len(),
            cache,
            stories,
        }
    }

    /// Writes the report as pretty JSON to `path`, or to stdout when `path` is `None`.
    pub fn write(&self, path: Option<&Path>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(self)?;
        match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, json)?;
                info!("Wrote {} story rows to {:?}", self.story_count, path);
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(json.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
