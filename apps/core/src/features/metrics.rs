//! Lexical-richness and syntactic-category metrics.
//!
//! Every metric maps "no lexical content" to its zero sentinel (`0.0`, or `0` for the
//! n-gram count) and never fails on empty or punctuation-only text. Only the two
//! tag-based metrics can return an error, and only when the tagger itself fails.
//!
//! Most metrics work on the cleaned tokens (`normalizer::clean`). The unigram + bigram
//! count deliberately works on the raw tokenization instead.

use std::sync::Arc;
use tracing::debug;

use super::corpus::{CorpusSet, CorpusTable};
use super::feature_vector::FeatureVector;
use super::freq_dist::{bigrams, unigrams};
use super::normalizer::{clean, word_tokenize};
use super::tag_cache::TaggingCache;
use super::tagger::PosTagger;
use crate::config::ExtractorConfig;
use crate::error::AppError;

/// Default exponent of the Brunet index.
pub const DEFAULT_BRUNET_ALPHA: f64 = -0.165;

/// Hapax ratio: types occurring exactly once, over the number of cleaned tokens.
pub fn word_used_once_frequency(text: &str) -> f64 {
    let tokens = clean(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let dist = unigrams(&tokens);
    dist.count_types_where(|count| count == 1) as f64 / tokens.len() as f64
}

/// Low-frequency ratio: types occurring at most twice, over the number of cleaned tokens.
pub fn word_used_once_or_twice_frequency(text: &str) -> f64 {
    let tokens = clean(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let dist = unigrams(&tokens);
    dist.count_types_where(|count| count <= 2) as f64 / tokens.len() as f64
}

/// Brunet index `N ^ (V ^ alpha)` over cleaned tokens.
pub fn brunet_index(text: &str, alpha: f64) -> f64 {
    let tokens = clean(text);
    let dist = unigrams(&tokens);
    let types = dist.unique_types();
    let count = tokens.len();
    if types == 0 || count == 0 {
        return 0.0;
    }
    (count as f64).powf((types as f64).powf(alpha))
}

/// Type-token ratio over cleaned tokens.
pub fn token_type_ratio(text: &str) -> f64 {
    let tokens = clean(text);
    if tokens.is_empty() {
        return 0.0;
    }
    unigrams(&tokens).unique_types() as f64 / tokens.len() as f64
}

/// Distinct unigrams plus distinct bigrams of the raw (unfiltered) tokenization.
pub fn uni_and_bi_grams_repetitions(text: &str) -> usize {
    let tokens = word_tokenize(text);
    if tokens.is_empty() {
        return 0;
    }
    unigrams(&tokens).unique_types() + bigrams(&tokens).unique_types()
}

/// Sum over cleaned types of `count * value`, plus the total occurrence count.
///
/// Types absent from the table contribute zero to the sum but still count as occurrences.
fn corpus_mass(tokens: &[String], table: &CorpusTable) -> (f64, usize) {
    let dist = unigrams(tokens);
    let mut matched = 0usize;
    let mut mass = 0.0;
    for (word, count) in dist.iter() {
        if let Some(value) = table.lookup(word) {
            matched += 1;
            mass += count as f64 * value;
        }
    }
    debug!(
        "{:?} lookup matched {}/{} types",
        table.scale(),
        matched,
        dist.unique_types()
    );
    (mass, dist.total())
}

/// Occurrence-weighted SUBTLWF frequency, divided by the number of cleaned tokens.
///
/// An absent table yields `0.0`.
pub fn word_freq_subtl(text: &str, corpus: Option<&CorpusTable>) -> f64 {
    let Some(table) = corpus else {
        return 0.0;
    };
    let tokens = clean(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let (mass, total) = corpus_mass(&tokens, table);
    if total == 0 {
        return 0.0;
    }
    mass / tokens.len() as f64
}

/// Occurrence-weighted Zipf frequency, divided by the total frequency mass.
///
/// An absent table yields `0.0`.
pub fn word_freq_zipf(text: &str, corpus: Option<&CorpusTable>) -> f64 {
    let Some(table) = corpus else {
        return 0.0;
    };
    let tokens = clean(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let (mass, total) = corpus_mass(&tokens, table);
    if total == 0 {
        return 0.0;
    }
    mass / total as f64
}

/// Computes the full feature vector for texts, owning the tagging cache.
pub struct FeatureExtractor {
    cache: TaggingCache,
    brunet_alpha: f64,
    include_to: bool,
}

impl FeatureExtractor {
    /// Extractor with a default-sized tagging cache and default parameters.
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self::with_cache(TaggingCache::new(tagger))
    }

    pub fn with_cache(cache: TaggingCache) -> Self {
        Self {
            cache,
            brunet_alpha: DEFAULT_BRUNET_ALPHA,
            include_to: true,
        }
    }

    /// Extractor parameterized from configuration.
    pub fn from_config(tagger: Arc<dyn PosTagger>, config: &ExtractorConfig) -> Result<Self, AppError> {
        let cache = TaggingCache::with_capacity(tagger, config.cache_capacity)?;
        Ok(Self::with_cache(cache)
            .with_brunet_alpha(config.brunet_alpha)
            .with_include_to(config.include_to))
    }

    pub fn with_brunet_alpha(mut self, alpha: f64) -> Self {
        self.brunet_alpha = alpha;
        self
    }

    pub fn with_include_to(mut self, include_to: bool) -> Self {
        self.include_to = include_to;
        self
    }

    pub fn cache(&self) -> &TaggingCache {
        &self.cache
    }

    /// Noun ratio: noun tags over the number of tagged tokens.
    pub fn nouns_freq_in_text(&self, text: &str) -> Result<f64, AppError> {
        let tags = self.cache.tags_of(text)?;
        if tags.is_empty() {
            return Ok(0.0);
        }
        let nouns = tags.iter().filter(|t| t.is_noun()).count();
        Ok(nouns as f64 / tags.len() as f64)
    }

    /// Adposition ratio: IN (and TO when `include_to`) tags over the number of cleaned tokens.
    pub fn adposition_frequency(&self, text: &str, include_to: bool) -> Result<f64, AppError> {
        let tags = self.cache.tags_of(text)?;
        if tags.is_empty() {
            return Ok(0.0);
        }
        let tokens = clean(text);
        // Tagging runs over the cleaned tokens, so both counts agree.
        if tokens.len() != tags.len() {
            return Err(AppError::Tagging(format!(
                "{} tags for {} cleaned tokens",
                tags.len(),
                tokens.len()
            )));
        }
        let adpositions = tags.iter().filter(|t| t.is_adposition(include_to)).count();
        Ok(adpositions as f64 / tokens.len() as f64)
    }

    /// All nine features with the configured Brunet exponent and TO policy.
    pub fn extract(&self, text: &str, corpora: &CorpusSet) -> Result<FeatureVector, AppError> {
        Ok(FeatureVector {
            nouns_freq_in_text: self.nouns_freq_in_text(text)?,
            word_used_once_frequency: word_used_once_frequency(text),
            word_used_once_or_twice_frequency: word_used_once_or_twice_frequency(text),
            brunet_index: brunet_index(text, self.brunet_alpha),
            token_type_ratio: token_type_ratio(text),
            adposition_frequency: self.adposition_frequency(text, self.include_to)?,
            uni_and_bi_grams_repetitions: uni_and_bi_grams_repetitions(text),
            word_freq_subtl: word_freq_subtl(text, corpora.subtlex.as_ref()),
            word_freq_zipf: word_freq_zipf(text, corpora.zipf.as_ref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::corpus::CorpusScale;
    use crate::features::tagger::LexiconTagger;

    const SAMPLE: &str = "the cat sat on the mat the cat ran";

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_sample_counts() {
        // 9 tokens; types the(3) cat(2) sat on mat ran(1 each)
        assert!(close(token_type_ratio(SAMPLE), 6.0 / 9.0));
        assert!(close(word_used_once_frequency(SAMPLE), 4.0 / 9.0));
        assert!(close(word_used_once_or_twice_frequency(SAMPLE), 5.0 / 9.0));
        assert!(close(brunet_index(SAMPLE, DEFAULT_BRUNET_ALPHA), 9f64.powf(6f64.powf(-0.165))));
        // 6 unigrams + 7 distinct bigrams
        assert_eq!(uni_and_bi_grams_repetitions(SAMPLE), 13);
    }

    #[test]
    fn test_empty_text_sentinels() {
        assert_eq!(token_type_ratio(""), 0.0);
        assert_eq!(word_used_once_frequency(""), 0.0);
        assert_eq!(word_used_once_or_twice_frequency(""), 0.0);
        assert_eq!(brunet_index("", DEFAULT_BRUNET_ALPHA), 0.0);
        assert_eq!(uni_and_bi_grams_repetitions(""), 0);
        assert_eq!(uni_and_bi_grams_repetitions("   "), 0);
    }

    #[test]
    fn test_ngrams_use_raw_tokens() {
        // Cleaned tokens are empty, raw tokens are not.
        assert_eq!(token_type_ratio("123 456 !!!"), 0.0);
        // 123, 456, ! unigrams; (123,456) (456,!) (!,!) bigrams
        assert_eq!(uni_and_bi_grams_repetitions("123 456 !!!"), 6);
        // Case is kept in the raw tokenization.
        assert_eq!(uni_and_bi_grams_repetitions("The the"), 3);
    }

    #[test]
    fn test_single_token_brunet() {
        // N = 1, V = 1: 1 ^ 1 = 1
        assert_eq!(brunet_index("word", DEFAULT_BRUNET_ALPHA), 1.0);
    }

    #[test]
    fn test_corpus_weighted_metrics() {
        let subtl = CorpusTable::from_pairs(CorpusScale::Subtlwf, [("the", 100.0), ("cat", 10.0)]);
        let zipf = CorpusTable::from_pairs(CorpusScale::Zipf, [("the", 7.0), ("cat", 4.0)]);

        // the x3, cat x2, four unmatched tokens
        let expected_subtl = (3.0 * 100.0 + 2.0 * 10.0) / 9.0;
        let expected_zipf = (3.0 * 7.0 + 2.0 * 4.0) / 9.0;
        assert!(close(word_freq_subtl(SAMPLE, Some(&subtl)), expected_subtl));
        assert!(close(word_freq_zipf(SAMPLE, Some(&zipf)), expected_zipf));
    }

    #[test]
    fn test_corpus_absent_or_unmatched() {
        let zipf = CorpusTable::from_pairs(CorpusScale::Zipf, [("zebra", 3.0)]);
        assert_eq!(word_freq_subtl(SAMPLE, None), 0.0);
        assert_eq!(word_freq_zipf(SAMPLE, None), 0.0);
        assert_eq!(word_freq_zipf(SAMPLE, Some(&zipf)), 0.0);
        assert_eq!(word_freq_zipf("", Some(&zipf)), 0.0);
    }

    #[test]
    fn test_corpus_lookup_uses_lowercased_tokens() {
        let zipf = CorpusTable::from_pairs(CorpusScale::Zipf, [("Cat", 4.0)]);
        assert_eq!(word_freq_zipf("Cat", Some(&zipf)), 0.0);
        let zipf = CorpusTable::from_pairs(CorpusScale::Zipf, [("cat", 4.0)]);
        assert_eq!(word_freq_zipf("Cat", Some(&zipf)), 4.0);
    }

    #[test]
    fn test_tag_based_metrics_with_lexicon_tagger() {
        let extractor = FeatureExtractor::new(Arc::new(LexiconTagger::new()));
        // the/DT cat/NN sat/VBD on/IN the/DT mat/NN the/DT cat/NN ran/VBD
        assert!(close(extractor.nouns_freq_in_text(SAMPLE).unwrap(), 3.0 / 9.0));
        assert!(close(extractor.adposition_frequency(SAMPLE, true).unwrap(), 1.0 / 9.0));
    }

    #[test]
    fn test_adposition_to_policy() {
        let extractor = FeatureExtractor::new(Arc::new(LexiconTagger::new()));
        let text = "We went to the park with him";
        // to/TO, with/IN over 7 tokens
        assert!(close(extractor.adposition_frequency(text, true).unwrap(), 2.0 / 7.0));
        assert!(close(extractor.adposition_frequency(text, false).unwrap(), 1.0 / 7.0));
    }

    #[test]
    fn test_extract_uses_configured_defaults() {
        let extractor = FeatureExtractor::new(Arc::new(LexiconTagger::new()))
            .with_include_to(false)
            .with_brunet_alpha(-0.2);
        let text = "They wanted to go to school";
        let vector = extractor.extract(text, &CorpusSet::default()).unwrap();
        assert_eq!(
            vector.adposition_frequency,
            extractor.adposition_frequency(text, false).unwrap()
        );
        assert_eq!(vector.brunet_index, brunet_index(text, -0.2));
        assert_eq!(vector.word_freq_subtl, 0.0);
        assert_eq!(vector.word_freq_zipf, 0.0);
    }

    #[test]
    fn test_extract_on_empty_text_is_zero() {
        let extractor = FeatureExtractor::new(Arc::new(LexiconTagger::new()));
        let corpora = CorpusSet {
            subtlex: Some(CorpusTable::from_pairs(CorpusScale::Subtlwf, [("a", 1.0)])),
            zipf: Some(CorpusTable::from_pairs(CorpusScale::Zipf, [("a", 1.0)])),
        };
        assert!(extractor.extract("", &corpora).unwrap().is_zero());
    }
}
