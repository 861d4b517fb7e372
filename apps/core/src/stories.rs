//! Story records: loading per-character JSON files and shaping them into feature rows.
//!
//! Each file holds one character with a deterioration-onset age and a list of dated
//! stories. Malformed files and characters without an onset age are skipped with a log
//! line; they never reach the metric library.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::features::corpus::CorpusSet;
use crate::features::feature_vector::FeatureVector;
use crate::features::metrics::FeatureExtractor;

fn default_name() -> String {
    "Unknown".to_string()
}

/// One dated story of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEntry {
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub story: Option<String>,
}

/// A character file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub start_deterioration_age: Option<f64>,
    #[serde(default)]
    pub stories: Vec<StoryEntry>,
}

/// A story placed on its character's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPoint {
    pub character: String,
    pub age: f64,
    pub deterioration_age: f64,
    /// `age - deterioration_age`; negative before onset.
    pub years_before_diagnostic: f64,
    pub story: String,
}

/// A story point with its computed features, the unit of the output report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryFeatures {
    pub character: String,
    pub age: f64,
    pub deterioration_age: f64,
    pub years_before_diagnostic: f64,
    #[serde(flatten)]
    pub features: FeatureVector,
}

/// Parses one character file.
pub fn load_record(path: &Path) -> Result<CharacterRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads every `*.json` file in `dir`, in path order.
///
/// Unreadable or malformed files are logged and skipped. A missing or unreadable
/// directory is an error.
pub fn load_records_from_folder(dir: &Path) -> Result<Vec<CharacterRecord>, AppError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        match load_record(&path) {
            Ok(record) => {
                info!(
                    "Loaded {:?} - character: {} - start deterioration age: {}",
                    path.file_name().unwrap_or_default(),
                    record.name,
                    record
                        .start_deterioration_age
                        .map(|age| age.to_string())
                        .unwrap_or_else(|| "Unknown".to_string())
                );
                records.push(record);
            }
            Err(e) => error!("Error loading {:?}: {}", path, e),
        }
    }
    Ok(records)
}

/// Flattens character records into story points.
///
/// Characters without an onset age are skipped with a warning; stories without an age or
/// with empty text are dropped.
pub fn aggregate_story_points(records: &[CharacterRecord]) -> Vec<StoryPoint> {
    let mut points = Vec::new();

    for record in records {
        let Some(deterioration_age) = record.start_deterioration_age else {
            warn!(
                "No deterioration age found for {}, skipping...",
                record.name
            );
            continue;
        };

        for entry in &record.stories {
            let (Some(age), Some(story)) = (entry.age, entry.story.as_deref()) else {
                continue;
            };
            if story.is_empty() {
                continue;
            }
            points.push(StoryPoint {
                character: record.name.clone(),
                age,
                deterioration_age,
                years_before_diagnostic: age - deterioration_age,
                story: story.to_string(),
            });
        }
    }

    points
}

/// Computes the feature vector of every story point, in order.
pub fn extract_story_features(
    extractor: &FeatureExtractor,
    points: &[StoryPoint],
    corpora: &CorpusSet,
) -> Result<Vec<StoryFeatures>, AppError> {
    points
        .iter()
        .map(|point| {
            Ok(StoryFeatures {
                character: point.character.clone(),
                age: point.age,
                deterioration_age: point.deterioration_age,
                years_before_diagnostic: point.years_before_diagnostic,
                features: extractor.extract(&point.story, corpora)?,
            })
        })
        .collect()
}
