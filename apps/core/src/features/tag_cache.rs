//! Bounded memoization of part-of-speech tagging.
//!
//! Results are keyed on the raw input text, not on its cleaned tokens. Eviction is
//! least-recently-used; a miss simply recomputes the same result, since taggers are
//! deterministic.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use super::normalizer::clean;
use super::tagger::{PosTagger, TaggedToken};
use crate::error::AppError;

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

struct CacheState {
    entries: LruCache<String, Arc<[TaggedToken]>>,
    hits: u64,
    misses: u64,
}

/// Tagging front-end owning the tagger and its bounded result cache.
///
/// Safe to share between threads: lookups and inserts happen under one mutex, tagging
/// itself runs outside it.
pub struct TaggingCache {
    tagger: Arc<dyn PosTagger>,
    state: Mutex<CacheState>,
}

impl TaggingCache {
    pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(2048) {
        Some(size) => size,
        None => panic!("Cache size must be non-zero"),
    };

    /// Creates a cache holding up to 2048 tagged texts.
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self::with_non_zero_capacity(tagger, Self::DEFAULT_CAPACITY)
    }

    /// Creates a cache with a custom capacity; zero is rejected.
    pub fn with_capacity(tagger: Arc<dyn PosTagger>, capacity: usize) -> Result<Self, AppError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| AppError::Config("tagging cache capacity must be at least 1".into()))?;
        Ok(Self::with_non_zero_capacity(tagger, capacity))
    }

    fn with_non_zero_capacity(tagger: Arc<dyn PosTagger>, capacity: NonZeroUsize) -> Self {
        Self {
            tagger,
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        }
    }

    // A panic while holding the lock cannot leave the LRU half-updated, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Tags the cleaned tokens of `text`.
    ///
    /// Text without lexical content yields an empty sequence and never reaches the tagger.
    /// The tagger must return one tag per cleaned token.
    pub fn tags_of(&self, text: &str) -> Result<Arc<[TaggedToken]>, AppError> {
        {
            let mut state = self.lock();
            if let Some(found) = state.entries.get(text).cloned() {
                state.hits += 1;
                return Ok(found);
            }
            state.misses += 1;
        }

        let tokens = clean(text);
        let tagged: Arc<[TaggedToken]> = if tokens.is_empty() {
            Arc::from(Vec::new())
        } else {
            let tagged = self.tagger.tag(&tokens)?;
            if tagged.len() != tokens.len() {
                return Err(AppError::Tagging(format!(
                    "tagger returned {} tags for {} tokens",
                    tagged.len(),
                    tokens.len()
                )));
            }
            Arc::from(tagged)
        };

        let mut state = self.lock();
        if let Some((evicted, _)) = state.entries.push(text.to_string(), Arc::clone(&tagged)) {
            if evicted != text {
                debug!("Tagging cache evicted an entry ({} chars)", evicted.len());
            }
        }
        Ok(tagged)
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            len: state.entries.len(),
            capacity: state.entries.cap().get(),
        }
    }

    /// Drops every cached entry; counters are kept.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}
