//! # Features Module
//!
//! Lexical and syntactic complexity features for narrative text.
//!
//! ## Components
//! - `normalizer`: word tokenization and alphabetic token cleaning
//! - `tagger`: part-of-speech tagging seam and the built-in lexicon tagger
//! - `tag_cache`: bounded LRU memoization of tagging results
//! - `freq_dist`: unigram and bigram frequency distributions
//! - `corpus`: SUBTLEX / Zipf frequency tables
//! - `metrics`: the nine metrics and the `FeatureExtractor` orchestrator
//! - `feature_vector`: output data structure

pub mod corpus;
pub mod feature_vector;
pub mod freq_dist;
pub mod metrics;
pub mod normalizer;
pub mod tag_cache;
pub mod tagger;

pub use corpus::{CorpusScale, CorpusSet, CorpusTable};
pub use feature_vector::FeatureVector;
pub use freq_dist::FrequencyDistribution;
pub use metrics::{FeatureExtractor, DEFAULT_BRUNET_ALPHA};
pub use normalizer::{clean, word_tokenize};
pub use tag_cache::{CacheStats, TaggingCache};
pub use tagger::{LexiconTagger, PosTagger, TaggedToken};
