// StoryMetrics entry point
// Loads character story folders and writes one feature row per story.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use storymetrics::config::ExtractorConfig;
use storymetrics::features::{CorpusSet, FeatureExtractor, LexiconTagger};
use storymetrics::logging::init_tracing;
use storymetrics::report::FeatureReport;
use storymetrics::stories::{aggregate_story_points, extract_story_features, load_records_from_folder};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = ExtractorConfig::from_env().context("invalid configuration")?;
    info!("Reading stories from {:?}", config.stories_dir);

    let corpora = CorpusSet::load(config.subtlex_path.as_deref(), config.zipf_path.as_deref())
        .context("failed to load frequency tables")?;

    let records = load_records_from_folder(&config.stories_dir)
        .with_context(|| format!("failed to read {:?}", config.stories_dir))?;
    let points = aggregate_story_points(&records);
    info!(
        "Aggregated {} stories from {} characters",
        points.len(),
        records.len()
    );

    let extractor = FeatureExtractor::from_config(Arc::new(LexiconTagger::new()), &config)?;
    let rows = extract_story_features(&extractor, &points, &corpora)?;

    let stats = extractor.cache().stats();
    info!(
        "Tagging cache: {} hits, {} misses, {}/{} entries",
        stats.hits, stats.misses, stats.len, stats.capacity
    );

    FeatureReport::new(rows, stats)
        .write(config.output_path.as_deref())
        .context("failed to write report")?;
    Ok(())
}
