//! Feature Vector - Output structure for one analyzed text.

use serde::{Deserialize, Serialize};

/// The nine lexical and syntactic features computed for a text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Share of tagged tokens that are nouns (NN, NNS, NNP, NNPS)
    pub nouns_freq_in_text: f64,
    /// Hapax legomena per cleaned token
    pub word_used_once_frequency: f64,
    /// Types seen at most twice per cleaned token
    pub word_used_once_or_twice_frequency: f64,
    /// Brunet's W
    pub brunet_index: f64,
    /// Types per cleaned token
    pub token_type_ratio: f64,
    /// Share of IN (and TO) tags per cleaned token
    pub adposition_frequency: f64,
    /// Distinct unigrams plus distinct bigrams of the raw tokenization
    pub uni_and_bi_grams_repetitions: usize,
    /// Occurrence-weighted mean SUBTLWF value
    pub word_freq_subtl: f64,
    /// Occurrence-weighted mean Zipf value
    pub word_freq_zipf: f64,
}

impl FeatureVector {
    /// True when every feature holds its zero sentinel.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
