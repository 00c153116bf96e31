//! Cosine distance and vocabulary ranking
//!
//! Distance between two tokens is `1 − cosineSimilarity` of their vectors.
//! Rows in the store are unit length, so the similarity is a single dot
//! product. Ranking a guess means one linear scan over the whole vocabulary
//! (O(V·D) per guess) — the dominant cost of the system — so the scan runs
//! over pre-normalized rows in parallel with no per-token allocation.

use crate::model::VectorStore;
use rayon::prelude::*;
use std::fmt;

/// Error type for distance queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The named token is absent from the vocabulary
    UnknownToken(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken(token) => {
                write!(f, "{token:?} is not in the model's vocabulary")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Outcome of ranking a guess against the day's target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    /// Cosine distance from the guess to the target
    pub distance: f32,
    /// Number of vocabulary tokens strictly closer to the target
    pub closer_count: usize,
    /// Full vocabulary size
    pub total: usize,
}

impl Ranking {
    /// Share of the vocabulary strictly closer to the target, in percent
    #[must_use]
    pub fn percentile(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.closer_count as f64 / self.total as f64 * 100.0
    }
}

/// Cosine distance between two unit-normalized vectors
///
/// Ranges from 0 (same direction) to 2 (opposite direction).
#[inline]
#[must_use]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    1.0 - dot
}

/// Distance queries over a borrowed [`VectorStore`]
///
/// Cheap to construct per request; holds no state beyond the store
/// reference, so independent requests can run their scans in parallel.
pub struct DistanceEngine<'a> {
    store: &'a VectorStore,
}

impl<'a> DistanceEngine<'a> {
    /// Create an engine over a loaded store
    #[must_use]
    pub const fn new(store: &'a VectorStore) -> Self {
        Self { store }
    }

    fn row_of(&self, token: &str) -> Result<usize, EngineError> {
        self.store
            .position(token)
            .ok_or_else(|| EngineError::UnknownToken(token.to_string()))
    }

    /// Cosine distance between two vocabulary tokens
    ///
    /// # Errors
    /// Returns `EngineError::UnknownToken` if either token is absent.
    ///
    /// # Examples
    /// ```
    /// use semantix::engine::DistanceEngine;
    /// use semantix::model::VectorStore;
    ///
    /// let store = VectorStore::from_entries(
    ///     2,
    ///     vec![
    ///         ("chat".to_string(), vec![1.0, 0.0]),
    ///         ("chien".to_string(), vec![0.0, 1.0]),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let engine = DistanceEngine::new(&store);
    /// let d = engine.distance("chat", "chien").unwrap();
    /// assert!((d - 1.0).abs() < 1e-6); // orthogonal vectors
    /// ```
    pub fn distance(&self, a: &str, b: &str) -> Result<f32, EngineError> {
        let row_a = self.row_of(a)?;
        let row_b = self.row_of(b)?;
        Ok(cosine_distance(self.store.row(row_a), self.store.row(row_b)))
    }

    /// Rank a guess against a target over the full vocabulary.
    ///
    /// Counts every token strictly closer to the target than the guess is,
    /// excluding the target itself. Guessing the target yields a count of 0.
    ///
    /// # Errors
    /// Returns `EngineError::UnknownToken` if either token is absent.
    pub fn rank_against_target(&self, target: &str, guess: &str) -> Result<Ranking, EngineError> {
        let target_row = self.row_of(target)?;
        let guess_row = self.row_of(guess)?;

        let target_vec = self.store.row(target_row);
        let guess_distance = cosine_distance(target_vec, self.store.row(guess_row));

        let closer_count = (0..self.store.len())
            .into_par_iter()
            .filter(|&row| {
                row != target_row && cosine_distance(target_vec, self.store.row(row)) < guess_distance
            })
            .count();

        Ok(Ranking {
            distance: guess_distance,
            closer_count,
            total: self.store.len(),
        })
    }

    /// The `k` vocabulary tokens closest to `token`, nearest first.
    ///
    /// The token itself is excluded. Useful for operating the game (sanity
    /// checks, hint generation); same scan cost as a ranked guess.
    ///
    /// # Errors
    /// Returns `EngineError::UnknownToken` if the token is absent.
    pub fn nearest(&self, token: &str, k: usize) -> Result<Vec<(&'a str, f32)>, EngineError> {
        let target_row = self.row_of(token)?;
        let target_vec = self.store.row(target_row);

        let mut scored: Vec<(&str, f32)> = (0..self.store.len())
            .into_par_iter()
            .filter(|&row| row != target_row)
            .map(|row| {
                (
                    self.store.token_at(row),
                    cosine_distance(target_vec, self.store.row(row)),
                )
            })
            .collect();

        scored.sort_by(|(_, a), (_, b)| a.total_cmp(b));
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> VectorStore {
        // chat ↔ chien are close, voiture points the other way.
        VectorStore::from_entries(
            2,
            vec![
                ("chat".to_string(), vec![1.0, 0.0]),
                ("chien".to_string(), vec![0.9, 0.1]),
                ("voiture".to_string(), vec![-1.0, 0.2]),
                ("avion".to_string(), vec![-0.9, -0.1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        for token in ["chat", "chien", "voiture", "avion"] {
            let d = engine.distance(token, token).unwrap();
            assert!(d.abs() < 1e-6, "distance({token}, {token}) = {d}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        for a in ["chat", "chien", "voiture"] {
            for b in ["chien", "voiture", "avion"] {
                let ab = engine.distance(a, b).unwrap();
                let ba = engine.distance(b, a).unwrap();
                assert!((ab - ba).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn distance_orders_by_similarity() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let close = engine.distance("chat", "chien").unwrap();
        let far = engine.distance("chat", "voiture").unwrap();
        assert!(close < far);
    }

    #[test]
    fn distance_unknown_token() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let result = engine.distance("chat", "licorne");
        assert!(matches!(
            result,
            Err(EngineError::UnknownToken(t)) if t == "licorne"
        ));
    }

    #[test]
    fn guessing_the_target_ranks_first() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let ranking = engine.rank_against_target("chat", "chat").unwrap();
        assert_eq!(ranking.closer_count, 0);
        assert_eq!(ranking.total, 4);
        assert!(ranking.distance.abs() < 1e-6);
        assert!(ranking.percentile().abs() < f64::EPSILON);
    }

    #[test]
    fn closer_count_excludes_target() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        // avion is the farthest token from chat: everything except the
        // target itself is closer.
        let ranking = engine.rank_against_target("chat", "avion").unwrap();
        assert_eq!(ranking.closer_count, 2);
        assert_eq!(ranking.total, 4);
    }

    #[test]
    fn ranking_is_monotonic_in_distance() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let near = engine.rank_against_target("chat", "chien").unwrap();
        let far = engine.rank_against_target("chat", "voiture").unwrap();

        assert!(near.distance < far.distance);
        assert!(near.closer_count <= far.closer_count);
    }

    #[test]
    fn ranking_unknown_target() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let result = engine.rank_against_target("licorne", "chat");
        assert!(matches!(
            result,
            Err(EngineError::UnknownToken(t)) if t == "licorne"
        ));
    }

    #[test]
    fn percentile_matches_closer_share() {
        let ranking = Ranking {
            distance: 0.5,
            closer_count: 1,
            total: 3,
        };
        assert!((ranking.percentile() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn nearest_orders_and_excludes_self() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let neighbors = engine.nearest("chat", 2).unwrap();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].0, "chien");
        assert!(neighbors[0].1 < neighbors[1].1);
        assert!(neighbors.iter().all(|(token, _)| *token != "chat"));
    }

    #[test]
    fn nearest_clamps_to_vocabulary() {
        let store = setup_store();
        let engine = DistanceEngine::new(&store);

        let neighbors = engine.nearest("chat", 100).unwrap();
        assert_eq!(neighbors.len(), 3);
    }
}
