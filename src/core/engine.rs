//! Memoizing hint engine
//!
//! Wraps [`Hint::compute`] with a per-run cache keyed by the (guess, target)
//! pair. The cache only grows; a hint is a pure function of its inputs so
//! entries never need invalidating.

use super::{Hint, Word};
use rustc_hash::FxHashMap;

/// Cache counters, reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Computes hints, remembering every pair it has seen
///
/// Construct one per run and pass it by `&mut` to whatever needs hints.
#[derive(Debug)]
pub struct HintEngine {
    cache: Option<FxHashMap<u64, Hint>>,
    hits: u64,
    misses: u64,
}

impl HintEngine {
    /// Create an engine with an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Some(FxHashMap::default()),
            hits: 0,
            misses: 0,
        }
    }

    /// Create an engine that recomputes every hint
    #[must_use]
    pub const fn without_cache() -> Self {
        Self {
            cache: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Whether results are being memoized
    #[must_use]
    pub const fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Get the hint for `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_next_guess::core::{HintEngine, Word};
    ///
    /// let mut engine = HintEngine::new();
    /// let guess = Word::new("acccc").unwrap();
    /// let target = Word::new("xxxxa").unwrap();
    ///
    /// assert_eq!(engine.hint(&guess, &target).to_string(), "Y....");
    /// assert_eq!(engine.hint(&guess, &target).to_string(), "Y....");
    /// assert_eq!(engine.stats().hits, 1);
    /// ```
    pub fn hint(&mut self, guess: &Word, target: &Word) -> Hint {
        let Some(cache) = self.cache.as_mut() else {
            self.misses += 1;
            return Hint::compute(guess, target);
        };

        let key = (u64::from(guess.key()) << 25) | u64::from(target.key());
        if let Some(&hint) = cache.get(&key) {
            self.hits += 1;
            return hint;
        }

        self.misses += 1;
        let hint = Hint::compute(guess, target);
        cache.insert(key, hint);
        hint
    }

    /// Snapshot of the cache counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.as_ref().map_or(0, FxHashMap::len),
        }
    }
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::new()
    }
}
