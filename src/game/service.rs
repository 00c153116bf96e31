//! Transport-agnostic game interface
//!
//! [`GameService`] owns the loaded model and exposes the two operations a
//! transport layer (HTTP or otherwise) maps onto routes: fetch the daily
//! word, and score a guess against it. All model state is immutable after
//! construction; requests only read shared state plus the per-date cached
//! target, so they can run concurrently without locking.

use crate::engine::{DistanceEngine, EngineError};
use crate::game::daily::DailyWordSelector;
use crate::game::variants::VariantResolver;
use crate::model::VectorStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// User-visible request errors (400-equivalents at a transport boundary)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess was absent or empty after trimming
    MissingGuess,
    /// The named token is not in the vocabulary after variant resolution
    UnknownToken(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGuess => write!(f, "Missing guess"),
            Self::UnknownToken(token) => {
                write!(f, "{token:?} is not in the model's vocabulary")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<EngineError> for GameError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownToken(token) => Self::UnknownToken(token),
        }
    }
}

/// Scored guess, created fresh per request
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    /// The guess as the caller spelled it (trimmed)
    pub guess: String,
    /// Cosine distance from the guess to the daily target
    pub distance: f32,
    /// Vocabulary tokens strictly closer to the target
    pub closer_count: usize,
    /// Full vocabulary size
    pub total: usize,
}

impl GuessResult {
    /// Share of the vocabulary strictly closer than the guess, in percent
    #[must_use]
    pub fn percentile(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.closer_count as f64 / self.total as f64 * 100.0
    }

    /// Percentile rendered as a fixed two-decimal string, e.g. `"0.05"`
    #[must_use]
    pub fn percentile_string(&self) -> String {
        format!("{:.2}", self.percentile())
    }
}

/// Wire shape of a scored guess
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    pub guess: String,
    pub distance: f32,
    pub closer_count: usize,
    pub total: usize,
    /// Two-decimal percentile string
    pub percentile: String,
}

impl From<&GuessResult> for GuessResponse {
    fn from(result: &GuessResult) -> Self {
        Self {
            guess: result.guess.clone(),
            distance: result.distance,
            closer_count: result.closer_count,
            total: result.total,
            percentile: result.percentile_string(),
        }
    }
}

/// Wire shape of the daily-word operation
#[derive(Debug, Clone, Serialize)]
pub struct DailyWordResponse {
    pub daily_word: String,
}

/// Wire shape of a request error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&GameError> for ErrorResponse {
    fn from(err: &GameError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// The game: a loaded model plus the daily-word and variant rules
///
/// Constructed once after the model loads, before serving begins; never
/// mutated afterwards.
#[derive(Debug)]
pub struct GameService {
    store: VectorStore,
    resolver: VariantResolver,
    selector: DailyWordSelector,
}

impl GameService {
    /// Build the service around a loaded store.
    ///
    /// `top_n` bounds the frequent-word pool the daily target is drawn from
    /// (clamped to the vocabulary size).
    #[must_use]
    pub fn new(store: VectorStore, top_n: usize) -> Self {
        let resolver = VariantResolver::new(&store);
        Self {
            store,
            resolver,
            selector: DailyWordSelector::new(top_n),
        }
    }

    /// The underlying vector store
    #[must_use]
    pub const fn store(&self) -> &VectorStore {
        &self.store
    }

    /// The day's target as a bare surface word
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> String {
        self.selector.daily_word(&self.store, date)
    }

    /// Score a guess against the day's target.
    ///
    /// The raw input is trimmed and normalized, canonicalized to its most
    /// frequent tagged variant, then ranked against the (equally
    /// canonicalized) target over the full vocabulary. The result echoes the
    /// caller's original spelling.
    ///
    /// # Errors
    /// - `GameError::MissingGuess` if the input is empty after trimming.
    /// - `GameError::UnknownToken` if the guess or the target is absent from
    ///   the vocabulary; an unknown guess is rejected, never scored against
    ///   a default.
    pub fn submit_guess(&self, raw: &str, date: NaiveDate) -> Result<GuessResult, GameError> {
        let original = raw.trim();
        if original.is_empty() {
            return Err(GameError::MissingGuess);
        }

        let guess = self.resolver.canonicalize(original);
        let target = self.resolver.canonicalize(&self.daily_word(date));

        let engine = DistanceEngine::new(&self.store);
        let ranking = engine.rank_against_target(&target, &guess)?;

        Ok(GuessResult {
            guess: original.to_string(),
            distance: ranking.distance,
            closer_count: ranking.closer_count,
            total: ranking.total,
        })
    }

    /// The `k` vocabulary tokens closest to a word, nearest first.
    ///
    /// The word is canonicalized like a guess.
    ///
    /// # Errors
    /// Returns `GameError::UnknownToken` if the word is absent from the
    /// vocabulary.
    pub fn nearest(&self, word: &str, k: usize) -> Result<Vec<(String, f32)>, GameError> {
        let token = self.resolver.canonicalize(word);
        let engine = DistanceEngine::new(&self.store);
        let neighbors = engine.nearest(&token, k)?;

        Ok(neighbors
            .into_iter()
            .map(|(t, d)| (t.to_string(), d))
            .collect())
    }
}
