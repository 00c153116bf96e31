//! Deterministic daily target selection
//!
//! The day's secret word is drawn uniformly from the top-N most frequent
//! vocabulary tokens, seeded purely by the calendar date. Same date, same
//! vocabulary snapshot → same word, across restarts. No wall-clock time or
//! external entropy feeds the pick.

use crate::core::strip_tag;
use crate::model::VectorStore;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Default size of the frequent-word pool the daily target is drawn from
pub const DEFAULT_TOP_N: usize = 3000;

/// Pick a deterministic index in `0..bound` from a seed.
///
/// A fresh, locally-seeded generator per call; no shared generator state
/// exists that concurrent requests could interfere with.
///
/// # Panics
/// Panics if `bound` is 0.
///
/// # Examples
/// ```
/// use semantix::game::deterministic_index;
///
/// let a = deterministic_index(738_000, 3000);
/// let b = deterministic_index(738_000, 3000);
/// assert_eq!(a, b);
/// assert!(a < 3000);
/// ```
#[must_use]
pub fn deterministic_index(seed: u64, bound: usize) -> usize {
    assert!(bound > 0, "cannot pick from an empty pool");
    let mut rng = StdRng::seed_from_u64(seed);
    rng.random_range(0..bound)
}

/// Seed for a calendar date: its proleptic-Gregorian ordinal day number
#[inline]
fn date_seed(date: NaiveDate) -> u64 {
    u64::from(date.num_days_from_ce().unsigned_abs())
}

/// Per-date deterministic target selection with a single-writer cache
///
/// The cached value is recomputed at most once per calendar date;
/// determinism makes the cache a pure optimization.
#[derive(Debug)]
pub struct DailyWordSelector {
    top_n: usize,
    cache: Mutex<Option<(NaiveDate, String)>>,
}

impl DailyWordSelector {
    /// Create a selector drawing from the `top_n` most frequent tokens
    #[must_use]
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            cache: Mutex::new(None),
        }
    }

    /// The target word for a date: a bare surface word, tag stripped.
    ///
    /// Repeated calls for the same date return the cached value; a date
    /// change recomputes and replaces it.
    ///
    /// # Panics
    /// Panics if the cache mutex is poisoned, which can only happen if a
    /// previous pick panicked.
    #[must_use]
    pub fn daily_word(&self, store: &VectorStore, date: NaiveDate) -> String {
        let mut cache = self.cache.lock().expect("daily word cache poisoned");

        if let Some((cached_date, word)) = cache.as_ref()
            && *cached_date == date
        {
            return word.clone();
        }

        let word = Self::pick(store, self.top_n, date);
        *cache = Some((date, word.clone()));
        word
    }

    /// The uncached pick: top-N clamped to the vocabulary, date-seeded
    /// uniform draw, tag suffix stripped.
    fn pick(store: &VectorStore, top_n: usize, date: NaiveDate) -> String {
        let bound = top_n.min(store.len());
        let index = deterministic_index(date_seed(date), bound);
        strip_tag(store.token_at(index)).to_string()
    }
}

impl Default for DailyWordSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> VectorStore {
        let entries: Vec<(String, Vec<f32>)> = (0..10)
            .map(|i| {
                (
                    format!("mot{i}_noun"),
                    vec![1.0, i as f32],
                )
            })
            .collect();
        VectorStore::from_entries(2, entries).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deterministic_index_is_reproducible() {
        for seed in [0, 1, 738_000, u64::MAX] {
            assert_eq!(
                deterministic_index(seed, 3000),
                deterministic_index(seed, 3000)
            );
        }
    }

    #[test]
    fn deterministic_index_within_bound() {
        for seed in 0..100 {
            assert!(deterministic_index(seed, 7) < 7);
        }
        assert_eq!(deterministic_index(42, 1), 0);
    }

    #[test]
    fn same_date_same_word() {
        let store = setup_store();
        let day = date(2026, 8, 25);

        let a = DailyWordSelector::default().daily_word(&store, day);
        let b = DailyWordSelector::default().daily_word(&store, day);

        // Fresh selectors (fresh processes) agree.
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_hit_cache() {
        let store = setup_store();
        let selector = DailyWordSelector::default();
        let day = date(2026, 8, 25);

        let first = selector.daily_word(&store, day);
        for _ in 0..5 {
            assert_eq!(selector.daily_word(&store, day), first);
        }
    }

    #[test]
    fn date_change_replaces_cache() {
        let store = setup_store();
        let selector = DailyWordSelector::default();

        let monday = selector.daily_word(&store, date(2026, 8, 24));
        let tuesday = selector.daily_word(&store, date(2026, 8, 25));
        let monday_again = selector.daily_word(&store, date(2026, 8, 24));

        assert_eq!(monday, monday_again);
        // Different dates may coincide by chance, but recomputation must
        // still be deterministic either way.
        let _ = tuesday;
    }

    #[test]
    fn daily_word_is_tag_stripped() {
        let store = setup_store();
        let selector = DailyWordSelector::default();

        let word = selector.daily_word(&store, date(2026, 8, 25));
        assert!(!word.contains('_'));
        assert!(word.starts_with("mot"));
    }

    #[test]
    fn top_n_clamped_to_vocabulary() {
        let store = setup_store();
        let selector = DailyWordSelector::new(1_000_000);

        // Would panic on an out-of-range index without clamping.
        let word = selector.daily_word(&store, date(2026, 8, 25));
        assert!(!word.is_empty());
    }

    #[test]
    fn top_n_one_always_picks_most_frequent() {
        let store = setup_store();
        let selector = DailyWordSelector::new(1);

        for day in 1..20 {
            assert_eq!(selector.daily_word(&store, date(2026, 8, day)), "mot0");
        }
    }
}
