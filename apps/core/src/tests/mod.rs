//! Test Module
//!
//! Cross-module tests for the StoryMetrics core.
//!
//! ## Test Categories
//! - `metrics_tests`: invariants that hold across the whole metric library
//! - `stories_tests`: folder loading, aggregation and report output
//! - `config_tests`: configuration from environment variables

pub mod config_tests;
