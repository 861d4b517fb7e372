//! Configuration Tests
//!
//! `ExtractorConfig::from_env` against controlled environment variables.

use std::path::PathBuf;

use crate::config::{
    ExtractorConfig, ENV_BRUNET_ALPHA, ENV_CACHE_CAPACITY, ENV_INCLUDE_TO, ENV_OUTPUT_PATH,
    ENV_STORIES_DIR, ENV_SUBTLEX_PATH, ENV_ZIPF_PATH,
};
use crate::error::AppError;
use crate::features::DEFAULT_BRUNET_ALPHA;

const ALL_VARS: &[&str] = &[
    ENV_STORIES_DIR,
    ENV_SUBTLEX_PATH,
    ENV_ZIPF_PATH,
    ENV_OUTPUT_PATH,
    ENV_CACHE_CAPACITY,
    ENV_BRUNET_ALPHA,
    ENV_INCLUDE_TO,
];

/// Runs `f` with only the given STORYMETRICS_* variables set.
fn with_env<F: FnOnce()>(set: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|name| {
            let value = set.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        with_env(&[(ENV_STORIES_DIR, "/data/stories")], || {
            let config = ExtractorConfig::from_env().unwrap();
            assert_eq!(config.stories_dir, PathBuf::from("/data/stories"));
            assert_eq!(config.cache_capacity, 2048);
            assert_eq!(config.brunet_alpha, DEFAULT_BRUNET_ALPHA);
            assert!(config.include_to);
            assert!(config.subtlex_path.is_none());
            assert!(config.zipf_path.is_none());
            assert!(config.output_path.is_none());
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                (ENV_STORIES_DIR, "stories"),
                (ENV_SUBTLEX_PATH, "tables/subtlex.csv"),
                (ENV_ZIPF_PATH, "tables/zipf.csv"),
                (ENV_OUTPUT_PATH, "out.json"),
                (ENV_CACHE_CAPACITY, "16"),
                (ENV_BRUNET_ALPHA, "-0.2"),
                (ENV_INCLUDE_TO, "false"),
            ],
            || {
                let config = ExtractorConfig::from_env().unwrap();
                assert_eq!(config.subtlex_path, Some(PathBuf::from("tables/subtlex.csv")));
                assert_eq!(config.zipf_path, Some(PathBuf::from("tables/zipf.csv")));
                assert_eq!(config.output_path, Some(PathBuf::from("out.json")));
                assert_eq!(config.cache_capacity, 16);
                assert_eq!(config.brunet_alpha, -0.2);
                assert!(!config.include_to);
            },
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        with_env(
            &[(ENV_STORIES_DIR, "stories"), (ENV_ZIPF_PATH, "  "), (ENV_CACHE_CAPACITY, "")],
            || {
                let config = ExtractorConfig::from_env().unwrap();
                assert!(config.zipf_path.is_none());
                assert_eq!(config.cache_capacity, 2048);
            },
        );
    }

    #[test]
    fn test_missing_stories_dir() {
        with_env(&[], || {
            assert!(matches!(ExtractorConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            (ENV_CACHE_CAPACITY, "many"),
            (ENV_CACHE_CAPACITY, "0"),
            (ENV_BRUNET_ALPHA, "steep"),
            (ENV_BRUNET_ALPHA, "NaN"),
            (ENV_INCLUDE_TO, "maybe"),
        ];
        for (name, value) in cases {
            with_env(&[(ENV_STORIES_DIR, "stories"), (name, value)], || {
                assert!(
                    matches!(ExtractorConfig::from_env(), Err(AppError::Config(_))),
                    "expected rejection for {}={}",
                    name,
                    value
                );
            });
        }
    }
}
