//! Frequency distributions over tokens and adjacent token pairs.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per distinct key, iterated in order of first occurrence.
///
/// Built fresh for every metric call. The number of distinct types (V) and the total number
/// of occurrences (N) are derived views, not stored separately. The stable iteration order
/// keeps floating-point sums over the distribution identical from call to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyDistribution<K: Eq + Hash + Clone> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> Default for FrequencyDistribution<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyDistribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::default();
        for key in iter {
            dist.add(key);
        }
        dist
    }
}

impl<K: Eq + Hash + Clone> FrequencyDistribution<K> {
    /// Records one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Occurrences of `key`, zero when absent.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys (V).
    pub fn unique_types(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts (N).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys whose count satisfies `pred`.
    pub fn count_types_where(&self, pred: impl Fn(usize) -> bool) -> usize {
        self.entries.iter().filter(|(_, count)| pred(*count)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

/// Unigram distribution borrowing from `tokens`.
pub fn unigrams(tokens: &[String]) -> FrequencyDistribution<&str> {
    tokens.iter().map(String::as_str).collect()
}

/// Distribution of adjacent token pairs.
pub fn bigrams(tokens: &[String]) -> FrequencyDistribution<(&str, &str)> {
    tokens
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect()
}
